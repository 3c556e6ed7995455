use crate::constants::storage::CHAT_HISTORIES_KEY;
use crate::error::ParleyError;
use crate::llm::{ChatModel, Message};
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};

/// An archived conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryEntry {
    pub id: String,
    pub messages: Vec<Message>,
    pub title: String,
    #[serde(alias = "modelNameViewInWeb")]
    pub model_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ChatHistoryEntry {
    /// Build an entry with a fresh id. The title is the first message's content.
    pub fn new(messages: Vec<Message>, model: ChatModel) -> Self {
        let title = messages
            .first()
            .map(|m| m.content.clone())
            .unwrap_or_else(|| crate::constants::defaults::UNTITLED.to_string());

        Self {
            id: generate_id(),
            messages,
            title,
            model_name: model.view_name().to_string(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
        }
    }

    pub fn model(&self) -> ChatModel {
        ChatModel::from_view_name(&self.model_name)
    }
}

/// Generate a unique chat history ID
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// The persisted collection, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistories {
    #[serde(default)]
    pub chat_history_details: Vec<ChatHistoryEntry>,
}

/// Archived conversations kept under a single storage key.
pub struct HistoryStore<S> {
    store: S,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<ChatHistories, ParleyError> {
        match self.store.get(CHAT_HISTORIES_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                ParleyError::Storage(format!("Failed to parse chat histories: {}", e))
            }),
            None => Ok(ChatHistories::default()),
        }
    }

    fn save(&self, histories: &ChatHistories) -> Result<(), ParleyError> {
        let raw = serde_json::to_string(histories)?;
        self.store.set(CHAT_HISTORIES_KEY, &raw)
    }

    /// All entries, most recently archived first.
    pub fn list(&self) -> Result<Vec<ChatHistoryEntry>, ParleyError> {
        Ok(self.load()?.chat_history_details)
    }

    pub fn get(&self, id: &str) -> Result<Option<ChatHistoryEntry>, ParleyError> {
        Ok(self
            .load()?
            .chat_history_details
            .into_iter()
            .find(|entry| entry.id == id))
    }

    pub fn contains(&self, id: &str) -> Result<bool, ParleyError> {
        Ok(self.load()?.chat_history_details.iter().any(|e| e.id == id))
    }

    /// Add an entry at the front. Ids must be unique.
    pub fn insert(&self, entry: ChatHistoryEntry) -> Result<(), ParleyError> {
        let mut histories = self.load()?;

        if histories.chat_history_details.iter().any(|e| e.id == entry.id) {
            return Err(ParleyError::DuplicateEntry(entry.id));
        }

        tracing::debug!(id = %entry.id, messages = entry.messages.len(), "archiving chat");
        histories.chat_history_details.insert(0, entry);
        self.save(&histories)
    }

    /// Remove an entry. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> Result<bool, ParleyError> {
        let mut histories = self.load()?;
        let before = histories.chat_history_details.len();
        histories.chat_history_details.retain(|e| e.id != id);

        if histories.chat_history_details.len() == before {
            return Ok(false);
        }

        self.save(&histories)?;
        Ok(true)
    }
}
