use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{defaults, storage};
use crate::context::CredentialStore;
use crate::error::ParleyError;
use crate::format::{ResponseFormatter, SyntectHighlighter};
use crate::llm::{ChatModel, OpenAIClient};
use crate::storage::{FileStore, KeyValueStore};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Model new chats start with.
    pub model: ChatModel,
    /// Environment variable consulted when no key is stored.
    pub api_key_env: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageSettings {
    /// Where history and credentials live. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: ChatModel::default(),
            api_key_env: defaults::API_KEY_ENV.to_string(),
            base_url: None,
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(storage::APP_DIR)
            .join(storage::CONFIG_FILE)
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Read settings from `path`, falling back to defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("Ignoring invalid config {}: {e}", path.display()),
                },
                Err(e) => tracing::warn!("Could not read config {}: {e}", path.display()),
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), ParleyError> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ParleyError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ParleyError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the API key from the environment variable specified in settings.
    pub fn env_api_key(&self) -> Option<String> {
        if self.llm.api_key_env.is_empty() {
            return None;
        }
        std::env::var(&self.llm.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    /// Stored credential first, then the environment.
    pub fn resolve_api_key<S: KeyValueStore>(
        &self,
        credentials: &CredentialStore<S>,
    ) -> Result<Option<String>, ParleyError> {
        match credentials.api_key()? {
            Some(key) => Ok(Some(key)),
            None => Ok(self.env_api_key()),
        }
    }

    pub fn build_client<S: KeyValueStore>(
        &self,
        credentials: &CredentialStore<S>,
    ) -> Result<OpenAIClient, ParleyError> {
        let api_key = self
            .resolve_api_key(credentials)?
            .ok_or(ParleyError::MissingApiKey)?;

        let client = OpenAIClient::new(api_key);
        Ok(match &self.llm.base_url {
            Some(url) => client.with_base_url(url.clone()),
            None => client,
        })
    }

    pub fn storage_dir(&self) -> Result<PathBuf, ParleyError> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => FileStore::default_dir(),
        }
    }

    pub fn build_store(&self) -> Result<FileStore, ParleyError> {
        FileStore::with_dir(self.storage_dir()?)
    }

    pub fn build_formatter(&self) -> ResponseFormatter<SyntectHighlighter> {
        ResponseFormatter::new(SyntectHighlighter::new())
    }
}
