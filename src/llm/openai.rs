//! OpenAI-compatible chat completion implementation.

use super::{Completion, CompletionProvider};
use crate::config::Settings;
use crate::error::{RecapError, Result};
use crate::openai::create_client;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Chat completion against an OpenAI-compatible server.
pub struct OpenAICompletion {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    temperature: String,
    request_url: String,
}

impl OpenAICompletion {
    /// Create a completion client from runtime settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: create_client(&settings.base_url, &settings.api_key),
            model: settings.model.clone(),
            temperature: settings.temperature.clone(),
            request_url: settings.request_url(),
        }
    }

    /// Parse the configured temperature.
    fn temperature(&self) -> Result<f32> {
        self.temperature.trim().parse::<f32>().map_err(|e| {
            RecapError::OpenAI(format!("Invalid temperature '{}': {}", self.temperature, e))
        })
    }

    fn build_messages(system: &str, user: &str) -> Result<Vec<ChatCompletionRequestMessage>> {
        Ok(vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system)
                .build()
                .map_err(|e| RecapError::OpenAI(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user)
                .build()
                .map_err(|e| RecapError::OpenAI(e.to_string()))?
                .into(),
        ])
    }
}

#[async_trait]
impl CompletionProvider for OpenAICompletion {
    #[instrument(skip(self, system, user), fields(model = %self.model))]
    async fn complete(&self, system: &str, user: &str) -> Result<Completion> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .temperature(self.temperature()?)
            .messages(Self::build_messages(system, user)?)
            .build()
            .map_err(|e| RecapError::OpenAI(format!("Failed to build request: {}", e)))?;

        info!("Requesting completion from {}", self.request_url);
        debug!("User message is {} chars", user.len());

        let response = self.client.chat().create(request).await.map_err(|e| {
            RecapError::OpenAI(format!("Failed to generate completion: {}", e))
        })?;

        let raw = serde_json::to_value(&response)?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| RecapError::OpenAI("Empty response from LLM".to_string()))?;

        debug!("Received completion of {} chars", text.len());

        Ok(Completion {
            text,
            raw: Some(raw),
        })
    }

    fn model(&self) -> &str {
        &self.model
    }
}
