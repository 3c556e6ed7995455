use crate::error::ParleyError;
use crate::llm::ChatModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

/// A remote chat completion endpoint.
///
/// The model travels with every request so that callers holding several
/// sessions never share a selection.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the conversation and get the assistant's reply text.
    async fn complete(&self, model: ChatModel, messages: &[Message])
        -> Result<String, ParleyError>;
}
