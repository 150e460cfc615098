use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Model, ModelError};

pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";
pub const DEFAULT_MODEL: &str = "llama3";

/// Keep the model loaded between retry attempts
const KEEP_ALIVE: &str = "5m";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    keep_alive: &'a str,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Ollama chat backend, non-streaming.
pub struct OllamaModel {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaModel {
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_base_url(model, DEFAULT_OLLAMA_URL)
    }

    pub fn with_base_url(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }
}

impl Default for OllamaModel {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

#[async_trait]
impl Model for OllamaModel {
    fn name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending chat request to Ollama"
        );

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
            keep_alive: KEEP_ALIVE,
        };

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Api(format!("{}: {}", status, body)));
        }

        let chat: ChatResponse = response.json().await?;

        debug!(
            model = %self.model,
            reply_len = chat.message.content.len(),
            "Received chat reply"
        );

        if chat.message.content.trim().is_empty() {
            return Err(ModelError::EmptyReply);
        }

        Ok(chat.message.content)
    }

    async fn is_available(&self) -> bool {
        self.client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let model = OllamaModel::with_base_url("llama3", "http://localhost:11434/");
        assert_eq!(model.base_url, "http://localhost:11434");
    }

    #[test]
    fn name_reports_backing_model() {
        let model = OllamaModel::new("qwen3:8b");
        assert_eq!(model.name(), "qwen3:8b");
    }

    #[test]
    fn chat_request_serializes_expected_shape() {
        let request = ChatRequest {
            model: "llama3",
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
            stream: false,
            keep_alive: KEEP_ALIVE,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "user");
    }
}
