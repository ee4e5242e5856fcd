use super::QuestionCommandService;
use crate::{
    application::{
        commands::references::{ensure_tags_exist, ensure_users_exist, optional_user, tag_set},
        dto::{QuestionDto, VoteDto, votes::vote_set_from},
        error::ApplicationResult,
    },
    domain::question::{QuestionId, QuestionReplacement, QuestionTitle},
};
use chrono::{DateTime, Utc};

/// Full replacement of a question's mutable state.
#[derive(Debug, Clone)]
pub struct UpdateQuestionCommand {
    pub title: String,
    pub body: Option<String>,
    pub modified_by: Option<String>,
    pub tags: Vec<String>,
    pub votes: Vec<VoteDto>,
    pub last_updated_at: Option<DateTime<Utc>>,
    /// Accepted for symmetry with the read model but never applied.
    pub created_at: Option<DateTime<Utc>>,
}

impl QuestionCommandService {
    pub async fn update_question(
        &self,
        target: impl Into<QuestionId>,
        command: UpdateQuestionCommand,
    ) -> ApplicationResult<QuestionDto> {
        let id = target.into();
        let mut question = self.load(id).await?;

        if command.created_at.is_some() {
            tracing::debug!(question_id = %id, "ignoring created_at on update");
        }

        let replacement = QuestionReplacement {
            title: QuestionTitle::new(command.title)?,
            body: command.body.unwrap_or_default(),
            tags: tag_set(command.tags)?,
            votes: vote_set_from(command.votes)?,
            modified_by: optional_user(command.modified_by)?,
            last_updated_at: command.last_updated_at.unwrap_or_else(|| self.clock.now()),
        };

        ensure_tags_exist(self.tag_repo.as_ref(), &replacement.tags).await?;
        question.replace(replacement);
        ensure_users_exist(self.user_repo.as_ref(), &question.referenced_users()).await?;

        let updated = self.write_repo.update(question).await?;
        Ok(updated.into())
    }
}
