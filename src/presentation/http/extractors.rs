// src/presentation/http/extractors.rs
use crate::{application::error::ApplicationError, presentation::http::state::HttpState};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{HeaderMapExt, Host};

use super::error::HttpError;

/// Where the current request landed, for building absolute `Location` URLs.
///
/// Resolved from `HttpState::public_base_url` when configured, otherwise
/// from the `Host` header (falling back to `localhost`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    base_url: String,
    path: String,
}

impl RequestContext {
    pub fn new(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let path = path.into();
        let path = match path.trim_end_matches('/') {
            "" => String::new(),
            trimmed => trimmed.to_string(),
        };
        Self { base_url, path }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}{request path}/{id}` with `id` percent-encoded as one path segment.
    pub fn location_for(&self, id: impl std::fmt::Display) -> String {
        let segment = id.to_string();
        format!(
            "{}{}/{}",
            self.base_url,
            self.path,
            urlencoding::encode(&segment)
        )
    }

    /// Absolute URL of an arbitrary path on this service.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn host_base_url(parts: &Parts) -> String {
    match parts.headers.typed_get::<Host>() {
        Some(host) => match host.port() {
            Some(port) => format!("http://{}:{}", host.hostname(), port),
            None => format!("http://{}", host.hostname()),
        },
        None => "http://localhost".to_string(),
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let base_url = app_state
            .public_base_url
            .clone()
            .unwrap_or_else(|| host_base_url(parts));

        Ok(Self::new(base_url, parts.uri.path()))
    }
}
