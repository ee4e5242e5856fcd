use crate::domain::answer::{
    entity::{Answer, NewAnswer},
    value_objects::AnswerId,
};
use crate::domain::errors::DomainResult;
use crate::domain::question::QuestionId;
use async_trait::async_trait;

#[async_trait]
pub trait AnswerRepository: Send + Sync {
    async fn find_by_id(&self, id: AnswerId) -> DomainResult<Option<Answer>>;

    async fn list_by_question(&self, question_id: QuestionId) -> DomainResult<Vec<Answer>>;

    async fn insert(&self, answer: NewAnswer) -> DomainResult<Answer>;

    /// Persists body, timestamps and the full vote set.
    async fn update(&self, answer: Answer) -> DomainResult<Answer>;

    async fn delete(&self, id: AnswerId) -> DomainResult<()>;

    /// Marks `id` as the chosen answer of its question and clears the flag on
    /// every sibling in the same transaction.
    async fn choose(&self, id: AnswerId) -> DomainResult<Answer>;
}
