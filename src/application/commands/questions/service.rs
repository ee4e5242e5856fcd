use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        question::{Question, QuestionId, QuestionReadRepository, QuestionWriteRepository},
        tag::TagRepository,
        user::UserRepository,
    },
};

pub struct QuestionCommandService {
    pub(super) write_repo: Arc<dyn QuestionWriteRepository>,
    pub(super) read_repo: Arc<dyn QuestionReadRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl QuestionCommandService {
    pub fn new(
        write_repo: Arc<dyn QuestionWriteRepository>,
        read_repo: Arc<dyn QuestionReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            tag_repo,
            user_repo,
            clock,
        }
    }

    pub(super) async fn load(&self, id: QuestionId) -> ApplicationResult<Question> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("question not found: {id}")))
    }
}
