pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Answer, AnswerPatch, NewAnswer};
pub use repository::AnswerRepository;
pub use value_objects::{AnswerBody, AnswerId};
