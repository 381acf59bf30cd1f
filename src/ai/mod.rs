// Chat completion capability - the seam behind the recommendation gateway

pub mod anthropic;

pub use anthropic::AnthropicClient;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    /// No API key configured for the chat service
    #[error("chat service is not configured (missing API key)")]
    MissingApiKey,

    /// HTTP request failed or timed out
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be decoded
    #[error("response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// Chat service returned an error status
    #[error("chat service error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body from the service
        message: String,
    },
}

/// Narrow chat-completion seam: prompt in, text out. The gateway's prompt
/// construction and response parsing never see the concrete provider.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ChatError>;
}
