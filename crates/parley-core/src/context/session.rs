use crate::context::{ChatHistoryEntry, HistoryStore};
use crate::error::ParleyError;
use crate::format::{HighlightEngine, ResponseFormatter};
use crate::llm::{suggest_title, ChatModel, CompletionClient, Message};
use crate::storage::KeyValueStore;

/// One conversation and the model it talks to.
///
/// A session is either the current chat or a reopened history entry
/// (`is_historical`). Reopened chats are not archived again.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<Message>,
    model: ChatModel,
    is_historical: bool,
}

impl ChatSession {
    pub fn new(model: ChatModel) -> Self {
        Self {
            messages: Vec::new(),
            model,
            is_historical: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn model(&self) -> ChatModel {
        self.model
    }

    pub fn set_model(&mut self, model: ChatModel) {
        self.model = model;
    }

    pub fn is_historical(&self) -> bool {
        self.is_historical
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Send `prompt` and append the formatted reply.
    ///
    /// Prompts of one character or less are ignored and yield `Ok(None)`.
    /// If the request fails the user message stays in the conversation.
    pub async fn send<H: HighlightEngine>(
        &mut self,
        client: &dyn CompletionClient,
        formatter: &ResponseFormatter<H>,
        prompt: &str,
    ) -> Result<Option<&Message>, ParleyError> {
        if prompt.chars().count() <= 1 {
            return Ok(None);
        }

        self.messages.push(Message::user(prompt));

        let reply = client.complete(self.model, &self.messages).await.map_err(|e| {
            tracing::warn!("completion request failed: {e}");
            e
        })?;
        let formatted = formatter.format(&reply)?;

        self.messages.push(Message::assistant(formatted));
        Ok(self.messages.last())
    }

    /// Start a new chat, archiving the current one if it has messages and
    /// was not opened from history.
    pub fn archive<S: KeyValueStore>(
        &mut self,
        store: &HistoryStore<S>,
    ) -> Result<Option<ChatHistoryEntry>, ParleyError> {
        let archived = if self.messages.is_empty() || self.is_historical {
            None
        } else {
            let entry = ChatHistoryEntry::new(self.messages.clone(), self.model);
            store.insert(entry.clone())?;
            Some(entry)
        };

        self.messages.clear();
        self.is_historical = false;
        Ok(archived)
    }

    /// Replace this session with an archived conversation and its model.
    pub fn open_history<S: KeyValueStore>(
        &mut self,
        store: &HistoryStore<S>,
        id: &str,
    ) -> Result<ChatHistoryEntry, ParleyError> {
        let entry = store
            .get(id)?
            .ok_or_else(|| ParleyError::NotFound(id.to_string()))?;

        self.model = entry.model();
        self.messages = entry.messages.clone();
        self.is_historical = true;
        Ok(entry)
    }

    /// Ask the model for a short title for this conversation.
    pub async fn suggest_title(&self, client: &dyn CompletionClient) -> Result<String, ParleyError> {
        suggest_title(client, self.model, &self.messages).await
    }
}
