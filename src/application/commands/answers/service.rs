use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        answer::{Answer, AnswerId, AnswerRepository},
        question::QuestionReadRepository,
        user::UserRepository,
    },
};

pub struct AnswerCommandService {
    pub(super) repo: Arc<dyn AnswerRepository>,
    pub(super) question_repo: Arc<dyn QuestionReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AnswerCommandService {
    pub fn new(
        repo: Arc<dyn AnswerRepository>,
        question_repo: Arc<dyn QuestionReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            question_repo,
            user_repo,
            clock,
        }
    }

    pub(super) async fn load(&self, id: AnswerId) -> ApplicationResult<Answer> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("answer not found: {id}")))
    }
}
