// Library interface for parley-cli
// This allows integration tests to access the command parser and themes.

pub mod app;
pub mod commands;
pub mod theme;

// Re-export commonly used items for easier testing
pub use commands::{handle_command, CommandResult};
pub use theme::Theme;
