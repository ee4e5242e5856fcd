// src/domain/question/entity.rs
use crate::domain::question::value_objects::{QuestionId, QuestionTitle};
use crate::domain::tag::TagName;
use crate::domain::user::UserId;
use crate::domain::vote::{VoteSet, VoteTally};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub title: QuestionTitle,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<UserId>,
    pub last_updated_at: DateTime<Utc>,
    pub modified_by: Option<UserId>,
    pub tags: BTreeSet<TagName>,
    pub votes: VoteSet,
}

impl Question {
    pub fn tally(&self) -> VoteTally {
        self.votes.tally()
    }

    pub fn upvotes(&self) -> u32 {
        self.tally().upvotes
    }

    pub fn downvotes(&self) -> u32 {
        self.tally().downvotes
    }

    /// Applies only the fields present in `patch`. Creation metadata is never
    /// touched, and `last_updated_at` only moves when the patch carries it.
    pub fn apply_patch(&mut self, patch: QuestionPatch) {
        let QuestionPatch {
            title,
            body,
            tags,
            votes,
            modified_by,
            last_updated_at,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(body) = body {
            self.body = body;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        if let Some(votes) = votes {
            self.votes = votes;
        }
        if let Some(modified_by) = modified_by {
            self.modified_by = Some(modified_by);
        }
        if let Some(last_updated_at) = last_updated_at {
            self.last_updated_at = last_updated_at;
        }
    }

    /// Replaces every mutable field. `created_at` and `created_by` survive.
    pub fn replace(&mut self, replacement: QuestionReplacement) {
        let QuestionReplacement {
            title,
            body,
            tags,
            votes,
            modified_by,
            last_updated_at,
        } = replacement;

        self.title = title;
        self.body = body;
        self.tags = tags;
        self.votes = votes;
        self.modified_by = modified_by;
        self.last_updated_at = last_updated_at;
    }

    pub fn referenced_users(&self) -> BTreeSet<UserId> {
        self.created_by
            .iter()
            .chain(self.modified_by.iter())
            .chain(self.votes.voters())
            .cloned()
            .collect()
    }
}

impl From<&Question> for QuestionId {
    fn from(question: &Question) -> Self {
        question.id
    }
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub title: QuestionTitle,
    pub body: String,
    pub created_by: Option<UserId>,
    pub tags: BTreeSet<TagName>,
    pub votes: VoteSet,
    pub created_at: DateTime<Utc>,
}

impl NewQuestion {
    pub fn referenced_users(&self) -> BTreeSet<UserId> {
        self.created_by
            .iter()
            .chain(self.votes.voters())
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuestionPatch {
    pub title: Option<QuestionTitle>,
    pub body: Option<String>,
    pub tags: Option<BTreeSet<TagName>>,
    pub votes: Option<VoteSet>,
    pub modified_by: Option<UserId>,
    pub last_updated_at: Option<DateTime<Utc>>,
}

impl QuestionPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.body.is_none()
            && self.tags.is_none()
            && self.votes.is_none()
            && self.modified_by.is_none()
            && self.last_updated_at.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct QuestionReplacement {
    pub title: QuestionTitle,
    pub body: String,
    pub tags: BTreeSet<TagName>,
    pub votes: VoteSet,
    pub modified_by: Option<UserId>,
    pub last_updated_at: DateTime<Utc>,
}
