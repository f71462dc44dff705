//! Chat completion requests.

mod openai;

pub use openai::OpenAICompletion;

use crate::error::Result;
use async_trait::async_trait;

/// Text generated by the model for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// Message content of the first choice.
    pub text: String,
    /// Full response body, when the provider exposes one.
    pub raw: Option<serde_json::Value>,
}

impl Completion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            raw: None,
        }
    }
}

/// Trait for chat completion backends.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one system message and one user message, return the reply.
    async fn complete(&self, system: &str, user: &str) -> Result<Completion>;

    /// Model identifier used for requests.
    fn model(&self) -> &str;
}
