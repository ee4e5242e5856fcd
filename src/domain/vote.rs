// src/domain/vote.rs
use crate::domain::errors::DomainError;
use crate::domain::user::UserId;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoteType {
    Upvote,
    Downvote,
}

impl VoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteType::Upvote => "UPVOTE",
            VoteType::Downvote => "DOWNVOTE",
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UPVOTE" => Ok(VoteType::Upvote),
            "DOWNVOTE" => Ok(VoteType::Downvote),
            other => Err(DomainError::validation(format!("unknown vote type: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub user_id: UserId,
    pub vote_type: VoteType,
}

impl Vote {
    pub fn new(user_id: UserId, vote_type: VoteType) -> Self {
        Self { user_id, vote_type }
    }
}

/// The votes cast on one question or answer, at most one per voter.
///
/// Casting again as the same user replaces that user's earlier vote, so the
/// set never double counts a voter and its tally does not depend on the
/// order votes arrived in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteSet(BTreeMap<UserId, VoteType>);

impl VoteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cast(&mut self, vote: Vote) {
        self.0.insert(vote.user_id, vote.vote_type);
    }

    pub fn iter(&self) -> impl Iterator<Item = Vote> + '_ {
        self.0
            .iter()
            .map(|(user_id, vote_type)| Vote::new(user_id.clone(), *vote_type))
    }

    pub fn voters(&self) -> impl Iterator<Item = &UserId> {
        self.0.keys()
    }

    pub fn tally(&self) -> VoteTally {
        self.0
            .values()
            .fold(VoteTally::default(), |mut tally, vote_type| {
                match vote_type {
                    VoteType::Upvote => tally.upvotes += 1,
                    VoteType::Downvote => tally.downvotes += 1,
                }
                tally
            })
    }
}

impl FromIterator<Vote> for VoteSet {
    fn from_iter<I: IntoIterator<Item = Vote>>(iter: I) -> Self {
        let mut set = VoteSet::new();
        for vote in iter {
            set.cast(vote);
        }
        set
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub upvotes: u32,
    pub downvotes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[test]
    fn tally_counts_each_kind() {
        let votes: VoteSet = [
            Vote::new(user("One"), VoteType::Upvote),
            Vote::new(user("Two"), VoteType::Upvote),
            Vote::new(user("Three"), VoteType::Upvote),
            Vote::new(user("Four"), VoteType::Downvote),
        ]
        .into_iter()
        .collect();

        let tally = votes.tally();
        assert_eq!(tally.upvotes, 3);
        assert_eq!(tally.downvotes, 1);
    }

    #[test]
    fn tally_is_independent_of_insertion_order() {
        let forward: VoteSet = [
            Vote::new(user("a"), VoteType::Downvote),
            Vote::new(user("b"), VoteType::Upvote),
        ]
        .into_iter()
        .collect();
        let backward: VoteSet = [
            Vote::new(user("b"), VoteType::Upvote),
            Vote::new(user("a"), VoteType::Downvote),
        ]
        .into_iter()
        .collect();

        assert_eq!(forward, backward);
        assert_eq!(forward.tally(), backward.tally());
    }

    #[test]
    fn recasting_replaces_the_voters_previous_vote() {
        let mut votes = VoteSet::new();
        votes.cast(Vote::new(user("a"), VoteType::Upvote));
        votes.cast(Vote::new(user("a"), VoteType::Downvote));

        assert_eq!(
            votes.iter().collect::<Vec<_>>(),
            [Vote::new(user("a"), VoteType::Downvote)]
        );
        assert_eq!(votes.tally(), VoteTally { upvotes: 0, downvotes: 1 });
    }

    #[test]
    fn empty_set_has_zero_tally() {
        assert_eq!(VoteSet::new().tally(), VoteTally::default());
    }

    #[test]
    fn vote_type_round_trips_through_its_wire_name() {
        assert_eq!("UPVOTE".parse::<VoteType>().unwrap(), VoteType::Upvote);
        assert_eq!(VoteType::Downvote.to_string(), "DOWNVOTE");
        assert!("SIDEWAYS".parse::<VoteType>().is_err());
        assert_eq!(
            serde_json::to_string(&VoteType::Upvote).unwrap(),
            "\"UPVOTE\""
        );
    }
}
