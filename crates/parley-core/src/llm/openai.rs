use crate::constants::endpoints;
use crate::error::ParleyError;
use crate::llm::traits::*;
use crate::llm::ChatModel;
use serde::{Deserialize, Serialize};

pub struct OpenAIClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: endpoints::OPENAI_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url: String = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAIMessage {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[async_trait::async_trait]
impl CompletionClient for OpenAIClient {
    async fn complete(
        &self,
        model: ChatModel,
        messages: &[Message],
    ) -> Result<String, ParleyError> {
        let url = format!("{}{}", self.base_url, endpoints::CHAT_COMPLETIONS_PATH);

        let request_body = OpenAIRequest {
            model: model.api_name(),
            messages,
        };

        tracing::debug!(model = model.api_name(), messages = messages.len(), "sending chat completion");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header(endpoints::USER_AGENT_HEADER, endpoints::USER_AGENT_VALUE)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(ParleyError::Llm(format!(
                "OpenAI API error ({}): {}",
                status, response_text
            )));
        }

        let api_response: OpenAIResponse = serde_json::from_str(&response_text)
            .map_err(|e| ParleyError::Llm(format!("Failed to parse response: {e}")))?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ParleyError::Llm("No response from API".into()))?;

        Ok(choice.message.content.unwrap_or_default())
    }
}
