pub mod error;
pub mod constants;
pub mod llm;
pub mod format;
pub mod storage;
pub mod context;
pub mod config;

// Re-export key types
pub use error::ParleyError;
pub use llm::{ChatModel, CompletionClient, Message, OpenAIClient, Role};
pub use format::{HighlightEngine, ResponseFormatter, SyntectHighlighter};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use context::{ChatHistoryEntry, ChatSession, CredentialStore, HistoryStore};
pub use config::Settings;
