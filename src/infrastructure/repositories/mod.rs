// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_answer;
mod sqlite_question;
mod sqlite_tag;
mod sqlite_user;
mod votes;

pub use error::map_sqlx;
pub use sqlite_answer::SqliteAnswerRepository;
pub use sqlite_question::{SqliteQuestionReadRepository, SqliteQuestionWriteRepository};
pub use sqlite_tag::SqliteTagRepository;
pub use sqlite_user::SqliteUserRepository;
