//! Key-value persistence standing in for browser local storage.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::ParleyError;

/// String-keyed, string-valued store. Values survive as long as the backend does.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, ParleyError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ParleyError>;
    fn remove(&self, key: &str) -> Result<(), ParleyError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, ParleyError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ParleyError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), ParleyError> {
        (**self).remove(key)
    }
}
