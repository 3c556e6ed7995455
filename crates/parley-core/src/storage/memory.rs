use crate::error::ParleyError;
use crate::storage::KeyValueStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-process store; contents vanish with the value.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ParleyError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| ParleyError::Storage("memory store lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ParleyError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ParleyError::Storage("memory store lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ParleyError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ParleyError::Storage("memory store lock poisoned".into()))?;
        entries.remove(key);
        Ok(())
    }
}
