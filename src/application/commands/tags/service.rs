use std::sync::Arc;

use crate::domain::tag::TagRepository;

pub struct TagCommandService {
    pub(super) repo: Arc<dyn TagRepository>,
}

impl TagCommandService {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }
}
