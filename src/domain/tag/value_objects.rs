// src/domain/tag/value_objects.rs
use crate::domain::errors::DomainResult;
use crate::domain::validation::path_safe_key;
use std::fmt;

const MAX_TAG_NAME_LEN: usize = 64;

/// A tag's name doubles as its identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagName(String);

impl TagName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        path_safe_key("tag name", &value, MAX_TAG_NAME_LEN)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TagName> for String {
    fn from(value: TagName) -> Self {
        value.0
    }
}
