use crate::domain::{
    errors::DomainResult,
    user::UserId,
    vote::{Vote, VoteSet, VoteType},
};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub(super) struct VoteRow {
    user_id: String,
    vote_type: String,
}

impl VoteRow {
    fn into_vote(self) -> DomainResult<Vote> {
        let vote_type: VoteType = self.vote_type.parse()?;
        Ok(Vote::new(UserId::new(self.user_id)?, vote_type))
    }
}

pub(super) fn vote_set(rows: Vec<VoteRow>) -> DomainResult<VoteSet> {
    rows.into_iter().map(VoteRow::into_vote).collect()
}
