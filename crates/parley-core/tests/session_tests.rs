use parley_core::context::{ChatSession, HistoryStore};
use parley_core::error::ParleyError;
use parley_core::format::{HighlightEngine, ResponseFormatter};
use parley_core::llm::{ChatModel, CompletionClient, Message, Role};
use parley_core::storage::{KeyValueStore, MemoryStore};
use std::sync::Mutex;

/// Replies with canned text and records the model and message count of each call.
struct ScriptedClient {
    replies: Mutex<Vec<Result<String, ParleyError>>>,
    seen: Mutex<Vec<(ChatModel, Vec<Message>)>>,
}

impl ScriptedClient {
    fn new(replies: Vec<Result<String, ParleyError>>) -> Self {
        Self {
            replies: Mutex::new(replies),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn seen(&self) -> Vec<(ChatModel, Vec<Message>)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(
        &self,
        model: ChatModel,
        messages: &[Message],
    ) -> Result<String, ParleyError> {
        self.seen.lock().unwrap().push((model, messages.to_vec()));
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(ParleyError::Llm("no scripted reply".into()));
        }
        replies.remove(0)
    }
}

struct Brackets;

impl HighlightEngine for Brackets {
    fn supports(&self, language: &str) -> bool {
        language != "unknown"
    }

    fn highlight(&self, code: &str, _language: &str) -> Result<String, ParleyError> {
        Ok(format!("[{code}]"))
    }
}

/// Engine whose highlighting always fails.
struct Broken;

impl HighlightEngine for Broken {
    fn supports(&self, _language: &str) -> bool {
        true
    }

    fn highlight(&self, code: &str, language: &str) -> Result<String, ParleyError> {
        Err(ParleyError::highlight(language, code))
    }
}

/// Backend that reads as empty and refuses every write.
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, ParleyError> {
        Ok(None)
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), ParleyError> {
        Err(ParleyError::Storage(format!("read-only: {key}")))
    }

    fn remove(&self, _key: &str) -> Result<(), ParleyError> {
        Ok(())
    }
}

fn formatter() -> ResponseFormatter<Brackets> {
    ResponseFormatter::new(Brackets)
}

fn history() -> HistoryStore<MemoryStore> {
    HistoryStore::new(MemoryStore::new())
}

// ========================================================================
// Sending
// ========================================================================

#[tokio::test]
async fn test_send_appends_user_and_formatted_reply() {
    let client = ScriptedClient::new(vec![Ok("Try ```js\nx()```".into())]);
    let mut session = ChatSession::new(ChatModel::Gpt4);

    let reply = session
        .send(&client, &formatter(), "how?")
        .await
        .unwrap()
        .cloned()
        .unwrap();

    assert_eq!(reply.role, Role::Assistant);
    assert_eq!(reply.content, "Try <pre><code class=\"js\">[x()]</code></pre>");
    assert_eq!(session.len(), 2);
    assert_eq!(session.messages()[0], Message::user("how?"));
}

#[tokio::test]
async fn test_send_passes_whole_conversation_and_session_model() {
    let client = ScriptedClient::new(vec![Ok("one".into()), Ok("two".into())]);
    let mut session = ChatSession::new(ChatModel::Gpt35);

    session.send(&client, &formatter(), "first").await.unwrap();
    session.send(&client, &formatter(), "second").await.unwrap();

    let seen = client.seen();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].0, ChatModel::Gpt35);
    assert_eq!(seen[0].1.len(), 1);
    assert_eq!(seen[1].1.len(), 3);
    assert_eq!(seen[1].1[1], Message::assistant("one"));
}

#[tokio::test]
async fn test_short_prompt_is_ignored() {
    let client = ScriptedClient::new(vec![]);
    let mut session = ChatSession::default();

    assert!(session.send(&client, &formatter(), "").await.unwrap().is_none());
    assert!(session.send(&client, &formatter(), "?").await.unwrap().is_none());
    assert!(session.is_empty());
    assert!(client.seen().is_empty());
}

#[tokio::test]
async fn test_failed_request_keeps_user_message() {
    let client = ScriptedClient::new(vec![Err(ParleyError::Llm("429".into()))]);
    let mut session = ChatSession::default();

    let err = session.send(&client, &formatter(), "hello").await.unwrap_err();

    assert!(matches!(err, ParleyError::Llm(_)));
    assert_eq!(session.messages(), &[Message::user("hello")]);
}

#[tokio::test]
async fn test_format_failure_keeps_only_user_message() {
    let client = ScriptedClient::new(vec![Ok("```js\nx```".into())]);
    let mut session = ChatSession::default();

    let err = session
        .send(&client, &ResponseFormatter::new(Broken), "hello")
        .await
        .unwrap_err();

    match err {
        ParleyError::Highlight { language, .. } => assert_eq!(language, "js"),
        other => panic!("Expected Highlight error, got {:?}", other),
    }
    assert_eq!(session.messages(), &[Message::user("hello")]);
}

// ========================================================================
// Archiving and reopening
// ========================================================================

#[tokio::test]
async fn test_archive_stores_entry_and_clears_session() {
    let store = history();
    let client = ScriptedClient::new(vec![Ok("hi!".into())]);
    let mut session = ChatSession::new(ChatModel::Gpt35);
    session.send(&client, &formatter(), "hello there").await.unwrap();

    let entry = session.archive(&store).unwrap().unwrap();

    assert_eq!(entry.title, "hello there");
    assert_eq!(entry.model_name, "gpt3.5");
    assert_eq!(entry.messages.len(), 2);
    assert!(session.is_empty());
    assert_eq!(store.list().unwrap(), vec![entry]);
}

#[test]
fn test_archive_empty_session_is_noop() {
    let store = history();
    let mut session = ChatSession::default();

    assert!(session.archive(&store).unwrap().is_none());
    assert!(store.list().unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_archive_keeps_session() {
    let store = HistoryStore::new(ReadOnlyStore);
    let client = ScriptedClient::new(vec![Ok("hi!".into())]);
    let mut session = ChatSession::new(ChatModel::Gpt35);
    session.send(&client, &formatter(), "keep me").await.unwrap();

    let err = session.archive(&store).unwrap_err();

    assert!(matches!(err, ParleyError::Storage(_)));
    assert_eq!(session.len(), 2);
    assert_eq!(session.messages()[0], Message::user("keep me"));
    assert!(!session.is_historical());
}

#[tokio::test]
async fn test_open_history_restores_messages_and_model() {
    let store = history();
    let client = ScriptedClient::new(vec![Ok("a".into()), Ok("b".into())]);

    let mut first = ChatSession::new(ChatModel::Gpt35);
    first.send(&client, &formatter(), "old chat").await.unwrap();
    let entry = first.archive(&store).unwrap().unwrap();

    let mut session = ChatSession::new(ChatModel::Gpt4);
    session.open_history(&store, &entry.id).unwrap();

    assert!(session.is_historical());
    assert_eq!(session.model(), ChatModel::Gpt35);
    assert_eq!(session.messages(), entry.messages.as_slice());

    // The other session keeps its own model.
    assert_eq!(first.model(), ChatModel::Gpt35);
    let other = ChatSession::new(ChatModel::Gpt4);
    assert_eq!(other.model(), ChatModel::Gpt4);

    session.send(&client, &formatter(), "follow up").await.unwrap();
    assert_eq!(client.seen()[1].0, ChatModel::Gpt35);
}

#[tokio::test]
async fn test_historical_chat_is_not_archived_again() {
    let store = history();
    let client = ScriptedClient::new(vec![Ok("a".into())]);

    let mut session = ChatSession::default();
    session.send(&client, &formatter(), "only once").await.unwrap();
    let entry = session.archive(&store).unwrap().unwrap();

    session.open_history(&store, &entry.id).unwrap();
    assert!(session.archive(&store).unwrap().is_none());
    assert!(!session.is_historical());
    assert!(session.is_empty());
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn test_open_unknown_history_is_not_found() {
    let store = history();
    let mut session = ChatSession::default();

    let err = session.open_history(&store, "missing").unwrap_err();
    assert!(matches!(err, ParleyError::NotFound(id) if id == "missing"));
    assert!(!session.is_historical());
}

// ========================================================================
// Titles
// ========================================================================

#[tokio::test]
async fn test_suggest_title_sends_single_prompt() {
    let client = ScriptedClient::new(vec![Ok("a".into()), Ok("  \"Sorting\" \n".into())]);
    let mut session = ChatSession::default();
    session.send(&client, &formatter(), "sort a vec").await.unwrap();

    let title = session.suggest_title(&client).await.unwrap();

    assert_eq!(title, "Sorting");
    let (_, request) = &client.seen()[1];
    assert_eq!(request.len(), 1);
    assert!(request[0]
        .content
        .starts_with("create a max 10 character title from below messages."));
    assert!(request[0].content.contains("sort a vec"));
}
