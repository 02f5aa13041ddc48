// src/application/ports/mod.rs
pub mod cache;
