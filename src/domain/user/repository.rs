use crate::domain::errors::DomainResult;
use crate::domain::user::{entity::User, value_objects::UserId};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn exists(&self, id: &UserId) -> DomainResult<bool>;

    async fn insert(&self, user: User) -> DomainResult<User>;

    async fn find_by_id(&self, id: &UserId) -> DomainResult<Option<User>>;

    async fn find_all(&self) -> DomainResult<Vec<User>>;
}
