// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod cache;
pub mod poem_repos;

pub use cache::RecordingCache;
pub use poem_repos::{CountingPoemRepo, FailingPoemRepo};
