use crate::domain::{
    errors::DomainResult,
    user::UserId,
    vote::{Vote, VoteSet, VoteType},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VoteDto {
    pub user_id: String,
    pub vote_type: VoteType,
}

impl VoteDto {
    pub fn new(user_id: impl Into<String>, vote_type: VoteType) -> Self {
        Self {
            user_id: user_id.into(),
            vote_type,
        }
    }

    pub fn list(votes: &VoteSet) -> Vec<Self> {
        votes
            .iter()
            .map(|vote| Self::new(vote.user_id, vote.vote_type))
            .collect()
    }
}

/// Builds a vote set; a later vote by the same user wins.
pub fn vote_set_from(votes: Vec<VoteDto>) -> DomainResult<VoteSet> {
    votes
        .into_iter()
        .map(|vote| UserId::new(vote.user_id).map(|user_id| Vote::new(user_id, vote.vote_type)))
        .collect()
}
