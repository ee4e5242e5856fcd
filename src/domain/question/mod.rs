pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewQuestion, Question, QuestionPatch, QuestionReplacement};
pub use repository::{QuestionReadRepository, QuestionWriteRepository};
pub use value_objects::{QuestionId, QuestionTitle};
