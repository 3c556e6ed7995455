use crate::constants::storage::API_KEY_KEY;
use crate::error::ParleyError;
use crate::storage::KeyValueStore;

/// Persists the API key.
pub struct CredentialStore<S> {
    store: S,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn api_key(&self) -> Result<Option<String>, ParleyError> {
        Ok(self
            .store
            .get(API_KEY_KEY)?
            .filter(|key| !key.trim().is_empty()))
    }

    /// Store `key`; an empty key clears the credential.
    pub fn set_api_key(&self, key: &str) -> Result<(), ParleyError> {
        let key = key.trim();
        if key.is_empty() {
            return self.clear();
        }
        self.store.set(API_KEY_KEY, key)
    }

    pub fn clear(&self) -> Result<(), ParleyError> {
        self.store.remove(API_KEY_KEY)
    }
}
