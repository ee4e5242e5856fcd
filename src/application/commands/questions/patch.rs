use super::QuestionCommandService;
use crate::{
    application::{
        commands::references::{ensure_tags_exist, ensure_users_exist, optional_user, tag_set},
        dto::{QuestionDto, VoteDto, votes::vote_set_from},
        error::ApplicationResult,
    },
    domain::question::{QuestionId, QuestionPatch, QuestionTitle},
};
use chrono::{DateTime, Utc};

/// Partial update; `None` means "leave as is".
#[derive(Debug, Clone, Default)]
pub struct PatchQuestionCommand {
    pub title: Option<String>,
    pub body: Option<String>,
    pub modified_by: Option<String>,
    pub tags: Option<Vec<String>>,
    pub votes: Option<Vec<VoteDto>>,
    pub last_updated_at: Option<DateTime<Utc>>,
    /// Never applied; creation time is immutable.
    pub created_at: Option<DateTime<Utc>>,
}

impl PatchQuestionCommand {
    pub fn votes(votes: Vec<VoteDto>) -> Self {
        Self {
            votes: Some(votes),
            ..Self::default()
        }
    }
}

impl QuestionCommandService {
    pub async fn patch_question(
        &self,
        target: impl Into<QuestionId>,
        command: PatchQuestionCommand,
    ) -> ApplicationResult<QuestionDto> {
        let id = target.into();
        let mut question = self.load(id).await?;

        let patch = QuestionPatch {
            title: command.title.map(QuestionTitle::new).transpose()?,
            body: command.body,
            tags: command.tags.map(tag_set).transpose()?,
            votes: command.votes.map(vote_set_from).transpose()?,
            modified_by: optional_user(command.modified_by)?,
            last_updated_at: command.last_updated_at,
        };

        if patch.is_empty() {
            return Ok(question.into());
        }

        if let Some(tags) = &patch.tags {
            ensure_tags_exist(self.tag_repo.as_ref(), tags).await?;
        }
        question.apply_patch(patch);
        ensure_users_exist(self.user_repo.as_ref(), &question.referenced_users()).await?;

        let tally = question.tally();
        tracing::debug!(
            question_id = %id,
            upvotes = tally.upvotes,
            downvotes = tally.downvotes,
            "question patched"
        );

        let updated = self.write_repo.update(question).await?;
        Ok(updated.into())
    }
}
