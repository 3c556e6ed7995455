use crate::constants::prompts;
use crate::error::ParleyError;
use crate::llm::{ChatModel, CompletionClient, Message};

/// Ask the model for a short title summarising `messages`.
pub async fn suggest_title(
    client: &dyn CompletionClient,
    model: ChatModel,
    messages: &[Message],
) -> Result<String, ParleyError> {
    let transcript = serde_json::to_string(messages)?;
    let request = [Message::user(format!("{} {}", prompts::TITLE_PREFIX, transcript))];

    let title = client.complete(model, &request).await?;
    Ok(title.trim().trim_matches('"').to_string())
}
