use crate::domain::errors::DomainResult;
use crate::domain::tag::{entity::Tag, value_objects::TagName};
use async_trait::async_trait;

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn exists(&self, name: &TagName) -> DomainResult<bool>;

    async fn find_by_name(&self, name: &TagName) -> DomainResult<Option<Tag>>;

    async fn find_all(&self) -> DomainResult<Vec<Tag>>;

    async fn insert(&self, tag: Tag) -> DomainResult<Tag>;

    async fn update(&self, tag: Tag) -> DomainResult<Tag>;

    /// Removes the tag and detaches it from every question that carries it.
    async fn delete(&self, name: &TagName) -> DomainResult<()>;
}
