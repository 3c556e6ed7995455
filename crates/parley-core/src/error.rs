use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParleyError {
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Highlight error: {language}: {message}")]
    Highlight { language: String, message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chat history not found: {0}")]
    NotFound(String),

    #[error("Chat history already exists: {0}")]
    DuplicateEntry(String),

    #[error("No API key configured")]
    MissingApiKey,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParleyError {
    pub fn highlight(language: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Highlight {
            language: language.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ParleyError>;
