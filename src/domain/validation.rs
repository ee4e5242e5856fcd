// src/domain/validation.rs
use crate::domain::errors::{DomainError, DomainResult};

const RESERVED_PATH_CHARS: [char; 4] = ['/', '?', '#', '%'];

/// Validates a natural key used as a single segment of resource URLs.
pub(crate) fn path_safe_key(kind: &str, value: &str, max_len: usize) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::validation(format!("{kind} cannot be empty")));
    }
    if value.chars().count() > max_len {
        return Err(DomainError::validation(format!(
            "{kind} must be at most {max_len} characters"
        )));
    }
    if value
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || RESERVED_PATH_CHARS.contains(&c))
    {
        return Err(DomainError::validation(format!(
            "{kind} must not contain whitespace or any of / ? # %"
        )));
    }
    Ok(())
}
