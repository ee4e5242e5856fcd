// src/application/commands/tags/mod.rs
mod add;
mod delete;
mod service;
mod update;

pub use add::AddTagCommand;
pub use service::TagCommandService;
pub use update::UpdateTagCommand;
