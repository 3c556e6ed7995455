/// Parley: centralized constants.
/// Model names, endpoints and storage keys live here.

// ─── Models ───────────────────────────────────────────────────────────────────

pub mod models {
    /// Names shown to the user and persisted in chat history.
    pub const GPT35_VIEW_NAME: &str = "gpt3.5";
    pub const GPT4_VIEW_NAME: &str = "gpt4";

    /// Names sent to the completion endpoint.
    pub const GPT35_API_NAME: &str = "gpt-3.5-turbo";
    pub const GPT4_API_NAME: &str = "gpt-4-1106-preview";
}

// ─── API Endpoints ────────────────────────────────────────────────────────────

pub mod endpoints {
    pub const OPENAI_BASE_URL: &str = "https://api.openai.com";
    pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
    pub const USER_AGENT_HEADER: &str = "X-User-Agent";
    pub const USER_AGENT_VALUE: &str = "OpenAPI-Generator/1.0/Javascript";
}

// ─── Storage ──────────────────────────────────────────────────────────────────

pub mod storage {
    pub const CHAT_HISTORIES_KEY: &str = "chatHistories";
    pub const API_KEY_KEY: &str = "apiKey";
    pub const APP_DIR: &str = "parley";
    pub const STORAGE_DIR: &str = "storage";
    pub const CONFIG_FILE: &str = "config.toml";
}

// ─── Formatting ───────────────────────────────────────────────────────────────

pub mod format {
    /// Language tag used when a fence has no tag or an unsupported one.
    pub const PLAIN_TEXT: &str = "plaintext";
}

// ─── Prompts ──────────────────────────────────────────────────────────────────

pub mod prompts {
    pub const TITLE_PREFIX: &str = "create a max 10 character title from below messages.";
}

// ─── Defaults ─────────────────────────────────────────────────────────────────

pub mod defaults {
    pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
    pub const MODEL: &str = super::models::GPT4_VIEW_NAME;
    pub const UNTITLED: &str = "Untitled";
}
