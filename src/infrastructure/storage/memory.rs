use std::{collections::HashMap, sync::Mutex};

use crate::application::{
    ApplicationResult, error::ApplicationError, ports::storage::KeyValueStorage,
};

#[derive(Default)]
pub struct InMemoryKeyValueStorage {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStorage {
    fn lock(&self) -> ApplicationResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| ApplicationError::infrastructure("key-value storage lock poisoned"))
    }
}

impl KeyValueStorage for InMemoryKeyValueStorage {
    fn get(&self, key: &str) -> ApplicationResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ApplicationResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ApplicationResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
