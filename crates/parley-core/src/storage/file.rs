use crate::constants::storage;
use crate::error::ParleyError;
use crate::storage::KeyValueStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores each key as `<key>.json` under a base directory.
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a store in the default directory (`<data_dir>/parley/storage`).
    pub fn new() -> Result<Self, ParleyError> {
        Self::with_dir(Self::default_dir()?)
    }

    /// Create a store with a custom directory (useful for testing)
    pub fn with_dir(base_dir: impl Into<PathBuf>) -> Result<Self, ParleyError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).map_err(|e| {
            ParleyError::Storage(format!("Failed to create storage directory: {}", e))
        })?;

        Ok(Self { base_dir })
    }

    pub fn default_dir() -> Result<PathBuf, ParleyError> {
        let data = dirs::data_dir().ok_or_else(|| {
            ParleyError::Storage("Could not determine data directory".to_string())
        })?;

        Ok(data.join(storage::APP_DIR).join(storage::STORAGE_DIR))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, ParleyError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.');
        if !valid || key.starts_with('.') {
            return Err(ParleyError::Storage(format!("Invalid storage key: {key:?}")));
        }
        Ok(self.base_dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ParleyError> {
        let path = self.key_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| ParleyError::Storage(format!("Failed to read {}: {}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ParleyError> {
        let path = self.key_path(key)?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value).map_err(|e| {
            ParleyError::Storage(format!("Failed to write temporary file for {}: {}", key, e))
        })?;

        fs::rename(&tmp_path, &path).map_err(|e| {
            ParleyError::Storage(format!("Failed to rename file for {}: {}", key, e))
        })?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ParleyError> {
        let path = self.key_path(key)?;
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                ParleyError::Storage(format!("Failed to delete {}: {}", key, e))
            })?;
        }
        Ok(())
    }
}
