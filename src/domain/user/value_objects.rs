// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::path_safe_key;
use std::fmt;

const MAX_HANDLE_LEN: usize = 64;

/// Stable user handle, chosen at registration and used in URLs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        path_safe_key("user id", &value, MAX_HANDLE_LEN)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("username cannot be empty"));
        }
        if trimmed.chars().count() > MAX_HANDLE_LEN {
            return Err(DomainError::validation(format!(
                "username must be at most {MAX_HANDLE_LEN} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_is_trimmed() {
        let name = Username::new("  ONE ").unwrap();
        assert_eq!(name.as_str(), "ONE");
    }

    #[test]
    fn blank_username_is_rejected() {
        assert!(matches!(
            Username::new("   "),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn user_id_rejects_path_separators() {
        assert!(UserId::new("one/two").is_err());
        assert!(UserId::new("One").is_ok());
    }
}
