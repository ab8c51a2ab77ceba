//! In-memory collaborator implementations

mod fixtures;

pub use fixtures::{vocab_pool, MemoryStore, StaticContent};
