// src/application/ports/storage.rs
use crate::application::ApplicationResult;

/// Small string values under fixed keys, persisted on the local machine.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> ApplicationResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> ApplicationResult<()>;
    fn remove(&self, key: &str) -> ApplicationResult<()>;
}
