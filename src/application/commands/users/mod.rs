mod register;
mod service;

pub use register::RegisterUserCommand;
pub use service::UserCommandService;
