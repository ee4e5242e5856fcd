use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::user::UserRepository};

pub struct UserCommandService {
    pub(super) repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
