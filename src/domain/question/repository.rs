use crate::domain::errors::DomainResult;
use crate::domain::question::{
    entity::{NewQuestion, Question},
    value_objects::QuestionId,
};
use crate::domain::tag::TagName;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Reads always load a question together with its tags and votes.
#[async_trait]
pub trait QuestionReadRepository: Send + Sync {
    async fn exists(&self, id: QuestionId) -> DomainResult<bool>;

    async fn find_by_id(&self, id: QuestionId) -> DomainResult<Option<Question>>;

    /// Returns one page ordered by id together with the total count.
    async fn list_paginated(
        &self,
        page: u32,
        page_size: u32,
    ) -> DomainResult<(Vec<Question>, u64)>;

    async fn find_by_title_containing(&self, fragment: &str) -> DomainResult<Vec<Question>>;

    async fn find_by_created_by(&self, user: &UserId) -> DomainResult<Vec<Question>>;

    async fn find_answered_by(&self, user: &UserId) -> DomainResult<Vec<Question>>;

    async fn find_by_tag(&self, tag: &TagName) -> DomainResult<Vec<Question>>;
}

#[async_trait]
pub trait QuestionWriteRepository: Send + Sync {
    async fn insert(&self, question: NewQuestion) -> DomainResult<Question>;

    /// Persists the full aggregate state, replacing stored tags and votes.
    async fn update(&self, question: Question) -> DomainResult<Question>;

    /// Deletes the question, its tag links, its votes and every answer to
    /// it (with their votes) in one transaction.
    async fn delete(&self, id: QuestionId) -> DomainResult<()>;
}
