use crate::constants::models;
use crate::error::ParleyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Models a chat session can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChatModel {
    #[serde(rename = "gpt3.5")]
    Gpt35,
    #[default]
    #[serde(rename = "gpt4")]
    Gpt4,
}

impl ChatModel {
    /// Name shown to the user and stored with chat history.
    pub fn view_name(&self) -> &'static str {
        match self {
            Self::Gpt35 => models::GPT35_VIEW_NAME,
            Self::Gpt4 => models::GPT4_VIEW_NAME,
        }
    }

    /// Model identifier sent to the completion endpoint.
    pub fn api_name(&self) -> &'static str {
        match self {
            Self::Gpt35 => models::GPT35_API_NAME,
            Self::Gpt4 => models::GPT4_API_NAME,
        }
    }

    /// Lenient lookup used for persisted history: unknown names fall back to gpt3.5.
    pub fn from_view_name(name: &str) -> Self {
        name.parse().unwrap_or(Self::Gpt35)
    }

    pub fn all() -> &'static [ChatModel] {
        &[Self::Gpt35, Self::Gpt4]
    }
}

impl fmt::Display for ChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.view_name())
    }
}

impl FromStr for ChatModel {
    type Err = ParleyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            models::GPT35_VIEW_NAME | models::GPT35_API_NAME => Ok(Self::Gpt35),
            models::GPT4_VIEW_NAME | models::GPT4_API_NAME => Ok(Self::Gpt4),
            other => Err(ParleyError::Config(format!("Unknown model: {other}"))),
        }
    }
}
