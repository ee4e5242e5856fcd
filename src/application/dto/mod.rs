pub mod answers;
pub mod pagination;
pub mod questions;
pub mod tags;
pub mod users;
pub mod votes;

pub use answers::AnswerDto;
pub use pagination::PaginatedResult;
pub use questions::QuestionDto;
pub use tags::TagDto;
pub use users::UserDto;
pub use votes::VoteDto;
