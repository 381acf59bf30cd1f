// Anthropic Messages API implementation of the chat-completion seam

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{ChatCompletion, ChatError};

const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

/// Upper bound on a single chat request; the gateway never waits longer.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct AnthropicClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl AnthropicClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url: DEFAULT_API_URL.to_string(),
            model,
        }
    }

    #[cfg(test)]
    fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl ChatCompletion for AnthropicClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ChatError> {
        if self.api_key.is_empty() {
            return Err(ChatError::MissingApiKey);
        }

        let request = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/messages", self.api_url))
            .timeout(REQUEST_TIMEOUT)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let body: MessagesResponse = response
                    .json()
                    .await
                    .map_err(|e| ChatError::ResponseParseFailed(e.to_string()))?;
                Ok(body
                    .content
                    .into_iter()
                    .map(|block| block.text)
                    .collect::<Vec<_>>()
                    .join(""))
            }
            status => {
                let message = response.text().await.unwrap_or_default();
                Err(ChatError::ApiError {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = AnthropicClient::new("test-key".to_string(), "test-model".to_string());
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.api_url, DEFAULT_API_URL);
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let client = AnthropicClient::new(String::new(), "test-model".to_string())
            .with_api_url("http://127.0.0.1:1".to_string());
        let err = client.complete("system", "prompt").await.unwrap_err();
        assert!(matches!(err, ChatError::MissingApiKey));
    }

    #[test]
    fn response_text_blocks_concatenate() {
        let body: MessagesResponse = serde_json::from_str(
            r#"{"content": [{"type": "text", "text": "[{\"venue_id\""}, {"type": "text", "text": ": \"v1\"}]"}]}"#,
        )
        .unwrap();
        let text: String = body.content.into_iter().map(|b| b.text).collect();
        assert_eq!(text, r#"[{"venue_id": "v1"}]"#);
    }
}
