mod choose;
mod create;
mod delete;
mod patch;
mod service;

pub use create::CreateAnswerCommand;
pub use patch::PatchAnswerCommand;
pub use service::AnswerCommandService;
