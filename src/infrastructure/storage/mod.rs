// src/infrastructure/storage/mod.rs
mod memory;

pub use memory::InMemoryKeyValueStorage;
