pub mod answer;
pub mod errors;
pub mod question;
pub mod tag;
pub mod user;
mod validation;
pub mod vote;
