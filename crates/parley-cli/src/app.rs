use anyhow::Result;
use crossterm::style::{Color, Stylize};
use parley_core::context::{ChatSession, CredentialStore, HistoryStore};
use parley_core::format::{ResponseFormatter, SyntectHighlighter};
use parley_core::llm::{ChatModel, CompletionClient, OpenAIClient};
use parley_core::storage::FileStore;
use parley_core::{ParleyError, Settings};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::{self, CommandResult};
use crate::theme::Theme;

const REQUEST_FAILED: &str =
    "API Request Failed, please check after some time or verify the OpenAI key.";

// ── Single-prompt mode ──────────────────────────────────────────────────

pub async fn run_single_prompt(
    settings: &Settings,
    prompt: &str,
    model: ChatModel,
    raw: bool,
) -> Result<()> {
    let credentials = CredentialStore::new(settings.build_store()?);
    let client = settings.build_client(&credentials)?;

    let reply = client
        .complete(model, &[parley_core::Message::user(prompt)])
        .await?;

    if raw {
        println!("{reply}");
    } else {
        let formatter = settings.build_formatter();
        println!("{}", formatter.format(&reply)?);
    }
    Ok(())
}

// ── Interactive REPL ────────────────────────────────────────────────────

struct ReplState {
    session: ChatSession,
    history: HistoryStore<Arc<FileStore>>,
    credentials: CredentialStore<Arc<FileStore>>,
    formatter: ResponseFormatter<SyntectHighlighter>,
    client: Option<OpenAIClient>,
    settings: Settings,
    theme: Theme,
    should_quit: bool,
}

impl ReplState {
    fn say(&self, color: Color, text: &str) {
        println!("{}", text.with(color));
    }

    fn rebuild_client(&mut self) {
        self.client = match self.settings.build_client(&self.credentials) {
            Ok(client) => Some(client),
            Err(ParleyError::MissingApiKey) => None,
            Err(e) => {
                tracing::warn!("Failed to build client: {e}");
                None
            }
        };
    }

    async fn send(&mut self, prompt: &str) {
        let Some(client) = self.client.as_ref() else {
            self.say(
                self.theme.error,
                "No API key configured. Use /key <api-key> or set OPENAI_API_KEY.",
            );
            return;
        };

        match self.session.send(client, &self.formatter, prompt).await {
            Ok(Some(reply)) => {
                println!("{}", "assistant".with(self.theme.assistant_color).bold());
                println!("{}\n", reply.content);
            }
            Ok(None) => {}
            Err(ParleyError::Highlight { language, message }) => {
                tracing::warn!("Highlighting {language} failed: {message}");
                self.say(self.theme.error, "Could not format the reply.");
            }
            Err(e) => {
                tracing::debug!("request failed: {e}");
                self.say(self.theme.error, REQUEST_FAILED);
            }
        }
    }

    async fn apply(&mut self, result: CommandResult) -> Result<()> {
        match result {
            CommandResult::Message(text) => self.say(self.theme.system_color, &text),
            CommandResult::Quit => self.should_quit = true,
            CommandResult::NewConversation => match self.session.archive(&self.history)? {
                Some(entry) => self.say(
                    self.theme.success,
                    &format!("Archived \"{}\" ({})", truncate(&entry.title, 40), entry.id),
                ),
                None => self.say(self.theme.muted, "Started a new chat."),
            },
            CommandResult::ListConversations => {
                let entries = self.history.list()?;
                if entries.is_empty() {
                    self.say(self.theme.muted, "No archived chats.");
                }
                for entry in entries {
                    println!(
                        "{}  {}  {}",
                        entry.id.as_str().with(self.theme.muted),
                        entry.model_name.as_str().with(self.theme.accent),
                        truncate(&entry.title, 60)
                    );
                }
            }
            CommandResult::LoadConversation(id) => {
                match self.session.open_history(&self.history, &id) {
                    Ok(entry) => {
                        self.say(
                            self.theme.success,
                            &format!("Opened \"{}\" [{}]", truncate(&entry.title, 40), entry.model_name),
                        );
                        for message in &entry.messages {
                            let color = match message.role {
                                parley_core::Role::User => self.theme.user_color,
                                _ => self.theme.assistant_color,
                            };
                            println!("{}", format!("{:?}", message.role).to_lowercase().with(color).bold());
                            println!("{}\n", message.content);
                        }
                    }
                    Err(ParleyError::NotFound(id)) => {
                        self.say(self.theme.error, &format!("Chat not found: {id}"))
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            CommandResult::DeleteConversation(id) => {
                if self.history.delete(&id)? {
                    self.say(self.theme.success, &format!("Deleted {id}"));
                } else {
                    self.say(self.theme.error, &format!("Chat not found: {id}"));
                }
            }
            CommandResult::ModelChanged(name) => match name.parse::<ChatModel>() {
                Ok(model) => {
                    self.session.set_model(model);
                    self.say(self.theme.success, &format!("Model set to {model}"));
                }
                Err(e) => self.say(self.theme.error, &e.to_string()),
            },
            CommandResult::SetApiKey(key) => {
                self.credentials.set_api_key(&key)?;
                self.rebuild_client();
                self.say(self.theme.success, "API key saved.");
            }
            CommandResult::SuggestTitle => {
                if self.session.is_empty() {
                    self.say(self.theme.muted, "Nothing to title yet.");
                } else if let Some(client) = self.client.as_ref() {
                    match self.session.suggest_title(client).await {
                        Ok(title) => self.say(self.theme.accent, &title),
                        Err(_) => self.say(self.theme.error, REQUEST_FAILED),
                    }
                } else {
                    self.say(self.theme.error, "No API key configured.");
                }
            }
            CommandResult::ThemeChanged(name) => {
                self.theme = Theme::by_name(&name);
                self.say(self.theme.success, &format!("Theme set to {}", self.theme.name));
            }
            CommandResult::ShowStatus => {
                let state = if self.session.is_historical() { "archived" } else { "current" };
                self.say(
                    self.theme.system_color,
                    &format!(
                        "model: {}  messages: {}  chat: {}  key: {}",
                        self.session.model(),
                        self.session.len(),
                        state,
                        if self.client.is_some() { "set" } else { "missing" }
                    ),
                );
            }
            CommandResult::NotACommand => {}
        }
        Ok(())
    }
}

pub async fn run_repl(settings: Settings, model: ChatModel, theme_name: &str) -> Result<()> {
    let backing = Arc::new(settings.build_store()?);

    let mut state = ReplState {
        session: ChatSession::new(model),
        history: HistoryStore::new(backing.clone()),
        credentials: CredentialStore::new(backing),
        formatter: settings.build_formatter(),
        client: None,
        settings,
        theme: Theme::by_name(theme_name),
        should_quit: false,
    };
    state.rebuild_client();

    state.say(
        state.theme.accent,
        &format!("Parley ({}) - type /help for commands", state.session.model()),
    );
    if state.client.is_none() {
        state.say(state.theme.muted, "No API key yet. Use /key <api-key> to add one.");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while !state.should_quit {
        print!("{} ", ">".with(state.theme.user_color));
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match commands::handle_command(&line) {
            CommandResult::NotACommand => state.send(&line).await,
            result => {
                if let Err(e) = state.apply(result).await {
                    state.say(state.theme.error, &format!("Error: {e}"));
                }
            }
        }
    }

    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    let first_line = text.lines().next().unwrap_or("");
    if first_line.chars().count() > max || first_line.len() < text.len() {
        let t: String = first_line.chars().take(max).collect();
        format!("{}...", t.trim_end())
    } else {
        first_line.to_string()
    }
}
