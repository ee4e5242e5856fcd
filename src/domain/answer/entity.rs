// src/domain/answer/entity.rs
use crate::domain::answer::value_objects::{AnswerBody, AnswerId};
use crate::domain::question::QuestionId;
use crate::domain::user::UserId;
use crate::domain::vote::{VoteSet, VoteTally};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub author: Option<UserId>,
    pub body: AnswerBody,
    pub chosen: bool,
    pub votes: VoteSet,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
}

impl Answer {
    pub fn tally(&self) -> VoteTally {
        self.votes.tally()
    }

    pub fn apply_patch(&mut self, patch: AnswerPatch, now: DateTime<Utc>) {
        if let Some(body) = patch.body {
            self.body = body;
            self.last_updated_at = now;
        }
        if let Some(votes) = patch.votes {
            self.votes = votes;
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub question_id: QuestionId,
    pub author: Option<UserId>,
    pub body: AnswerBody,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct AnswerPatch {
    pub body: Option<AnswerBody>,
    pub votes: Option<VoteSet>,
}

impl AnswerPatch {
    pub fn referenced_users(&self) -> BTreeSet<UserId> {
        self.votes
            .iter()
            .flat_map(|votes| votes.voters())
            .cloned()
            .collect()
    }
}
