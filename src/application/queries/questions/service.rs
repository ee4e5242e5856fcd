use std::sync::Arc;

use crate::domain::{question::QuestionReadRepository, tag::TagRepository, user::UserRepository};

pub struct QuestionQueryService {
    pub(super) read_repo: Arc<dyn QuestionReadRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl QuestionQueryService {
    pub fn new(
        read_repo: Arc<dyn QuestionReadRepository>,
        tag_repo: Arc<dyn TagRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            read_repo,
            tag_repo,
            user_repo,
        }
    }
}
