use std::sync::Arc;

use crate::domain::tag::TagRepository;

pub struct TagQueryService {
    pub(super) repo: Arc<dyn TagRepository>,
}

impl TagQueryService {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }
}
