use std::sync::Arc;

use crate::domain::{answer::AnswerRepository, question::QuestionReadRepository};

pub struct AnswerQueryService {
    pub(super) repo: Arc<dyn AnswerRepository>,
    pub(super) question_repo: Arc<dyn QuestionReadRepository>,
}

impl AnswerQueryService {
    pub fn new(
        repo: Arc<dyn AnswerRepository>,
        question_repo: Arc<dyn QuestionReadRepository>,
    ) -> Self {
        Self {
            repo,
            question_repo,
        }
    }
}
