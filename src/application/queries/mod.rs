pub mod answers;
pub mod questions;
pub mod tags;
pub mod users;
