// src/application/queries/questions/mod.rs
mod filters;
mod get;
mod list;
mod service;

pub use list::{DEFAULT_PAGE_SIZE, ListQuestionsQuery, MAX_PAGE_SIZE};
pub use service::QuestionQueryService;
