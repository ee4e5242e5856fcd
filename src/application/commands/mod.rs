pub mod answers;
pub mod questions;
mod references;
pub mod tags;
pub mod users;
