// src/application/commands/questions/mod.rs
mod create;
mod delete;
mod patch;
mod service;
mod update;

pub use create::CreateQuestionCommand;
pub use patch::PatchQuestionCommand;
pub use service::QuestionCommandService;
pub use update::UpdateQuestionCommand;
