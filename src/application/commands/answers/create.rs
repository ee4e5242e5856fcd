use super::AnswerCommandService;
use crate::{
    application::{
        commands::references::{ensure_users_exist, optional_user},
        dto::AnswerDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        answer::{AnswerBody, NewAnswer},
        question::QuestionId,
    },
};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct CreateAnswerCommand {
    pub author: Option<String>,
    pub body: String,
}

impl AnswerCommandService {
    pub async fn add_answer(
        &self,
        question: impl Into<QuestionId>,
        command: CreateAnswerCommand,
    ) -> ApplicationResult<AnswerDto> {
        let question_id = question.into();
        if !self.question_repo.exists(question_id).await? {
            return Err(ApplicationError::not_found(format!(
                "question not found: {question_id}"
            )));
        }

        let new_answer = NewAnswer {
            question_id,
            author: optional_user(command.author)?,
            body: AnswerBody::new(command.body)?,
            created_at: self.clock.now(),
        };
        let authors: BTreeSet<_> = new_answer.author.iter().cloned().collect();
        ensure_users_exist(self.user_repo.as_ref(), &authors).await?;

        let answer = self.repo.insert(new_answer).await?;
        tracing::info!(answer_id = %answer.id, question_id = %question_id, "answer created");
        Ok(answer.into())
    }
}
