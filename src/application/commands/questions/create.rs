use super::QuestionCommandService;
use crate::{
    application::{
        commands::references::{ensure_tags_exist, ensure_users_exist, optional_user, tag_set},
        dto::{QuestionDto, VoteDto, votes::vote_set_from},
        error::ApplicationResult,
    },
    domain::question::{NewQuestion, QuestionTitle},
};

#[derive(Debug, Clone)]
pub struct CreateQuestionCommand {
    pub title: String,
    pub body: Option<String>,
    pub created_by: Option<String>,
    pub tags: Vec<String>,
    pub votes: Vec<VoteDto>,
}

impl QuestionCommandService {
    /// Ids are assigned by the store, so a new question can never collide
    /// with an existing one; the referenced tags and users must exist.
    pub async fn add_question(
        &self,
        command: CreateQuestionCommand,
    ) -> ApplicationResult<QuestionDto> {
        let new_question = NewQuestion {
            title: QuestionTitle::new(command.title)?,
            body: command.body.unwrap_or_default(),
            created_by: optional_user(command.created_by)?,
            tags: tag_set(command.tags)?,
            votes: vote_set_from(command.votes)?,
            created_at: self.clock.now(),
        };

        ensure_tags_exist(self.tag_repo.as_ref(), &new_question.tags).await?;
        ensure_users_exist(self.user_repo.as_ref(), &new_question.referenced_users()).await?;

        let question = self.write_repo.insert(new_question).await?;
        tracing::info!(question_id = %question.id, "question created");
        Ok(question.into())
    }
}
