mod history;
mod credentials;
mod session;

pub use history::{ChatHistories, ChatHistoryEntry, HistoryStore};
pub use credentials::CredentialStore;
pub use session::ChatSession;
