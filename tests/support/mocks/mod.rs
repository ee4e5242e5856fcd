// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod tag_repo;
pub mod time;

pub use tag_repo::{CapturingTagRepo, TagRepoCall};
pub use time::{FixedClock, fixed_now};
