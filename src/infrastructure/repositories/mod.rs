// src/infrastructure/repositories/mod.rs
mod in_memory_poem;

pub use in_memory_poem::InMemoryPoemRepository;
