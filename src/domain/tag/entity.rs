// src/domain/tag/entity.rs
use crate::domain::tag::value_objects::TagName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: TagName,
    pub description: Option<String>,
}

impl Tag {
    pub fn new(name: TagName) -> Self {
        Self {
            name,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }
}

impl From<&Tag> for TagName {
    fn from(tag: &Tag) -> Self {
        tag.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tag_has_no_description() {
        let tag = Tag::new(TagName::new("Java").unwrap());
        assert_eq!(tag.name.as_str(), "Java");
        assert!(tag.description.is_none());
    }

    #[test]
    fn reference_converts_to_its_name() {
        let tag = Tag::new(TagName::new("Rust").unwrap()).with_description("systems");
        let name: TagName = (&tag).into();
        assert_eq!(name, tag.name);
    }
}
