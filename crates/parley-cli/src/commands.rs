/// Result of processing a slash command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// Display a message to the user.
    Message(String),
    /// Quit the application.
    Quit,
    /// Archive the current chat and start a fresh one.
    NewConversation,
    /// List archived chats.
    ListConversations,
    /// Reopen an archived chat by ID.
    LoadConversation(String),
    /// Delete an archived chat by ID.
    DeleteConversation(String),
    /// Change the model of the current chat.
    ModelChanged(String),
    /// Store a new API key.
    SetApiKey(String),
    /// Ask the model for a title for the current chat.
    SuggestTitle,
    /// Change the theme.
    ThemeChanged(String),
    /// Show status (model, message count, history state).
    ShowStatus,
    /// Not a command - treat as regular input.
    NotACommand,
}

pub fn handle_command(input: &str) -> CommandResult {
    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0];
    let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

    match cmd {
        "/help" | "/h" => show_help(),
        "/exit" | "/quit" | "/q" => CommandResult::Quit,
        "/new" => CommandResult::NewConversation,

        // History commands
        "/history" | "/conversations" => CommandResult::ListConversations,
        "/load" => {
            if arg.is_empty() {
                CommandResult::Message("Usage: /load <conversation-id>".into())
            } else {
                CommandResult::LoadConversation(arg.to_string())
            }
        }
        "/delete" | "/rm" => {
            if arg.is_empty() {
                CommandResult::Message("Usage: /delete <conversation-id>".into())
            } else {
                CommandResult::DeleteConversation(arg.to_string())
            }
        }
        "/title" => CommandResult::SuggestTitle,

        // Model & credentials
        "/model" => {
            if arg.is_empty() {
                let models = parley_core::ChatModel::all()
                    .iter()
                    .map(|m| m.view_name())
                    .collect::<Vec<_>>()
                    .join(", ");
                CommandResult::Message(format!(
                    "Available models: {models}\nUsage: /model <model-name>"
                ))
            } else {
                CommandResult::ModelChanged(arg.to_string())
            }
        }
        "/key" => {
            if arg.is_empty() {
                CommandResult::Message(
                    "Usage: /key <api-key>\nThe key is kept in local storage only.".into(),
                )
            } else {
                CommandResult::SetApiKey(arg.to_string())
            }
        }

        // Display
        "/theme" => {
            if arg.is_empty() {
                let themes = crate::theme::Theme::all_names().join(", ");
                CommandResult::Message(format!("Available themes: {themes}\nUsage: /theme <theme-name>"))
            } else {
                CommandResult::ThemeChanged(arg.to_string())
            }
        }
        "/status" => CommandResult::ShowStatus,
        "/version" => CommandResult::Message(format!("Parley CLI v{}", env!("CARGO_PKG_VERSION"))),

        // Unknown command
        _ => {
            if input.starts_with('/') {
                CommandResult::Message(format!("Unknown command: {cmd}. Type /help for commands."))
            } else {
                CommandResult::NotACommand
            }
        }
    }
}

fn show_help() -> CommandResult {
    let help_text = "\
╭─ Parley Commands ──────────────────────────────────────────────╮

  CHAT
    /new                      Archive this chat and start a new one
    /history, /conversations  List archived chats
    /load <id>                Reopen an archived chat
    /delete <id>, /rm <id>    Delete an archived chat
    /title                    Suggest a title for this chat

  MODEL & KEY
    /model <name>             Change the model of this chat
    /key <api-key>            Store your OpenAI API key

  DISPLAY
    /theme <name>             Change color theme
    /status                   Show model and chat state

  OTHER
    /help, /h                 Show this help message
    /version                  Show version information
    /exit, /quit, /q          Quit the application

╰────────────────────────────────────────────────────────────────╯";

    CommandResult::Message(help_text.into())
}
