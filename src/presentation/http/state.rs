// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Overrides the scheme and authority used in `Location` headers.
    pub public_base_url: Option<String>,
}
