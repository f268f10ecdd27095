//! OpenAI-compatible [`LlmClient`]: forwards turns verbatim to openai-client.

use async_trait::async_trait;
use openai_client::{CompletionParams, OpenAIClient, UpstreamError};
use prompt::ChatMessage;
use tracing::instrument;

use super::{chat_message_to_openai, LlmClient, LlmConfig};

/// Default model when none is configured.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// [`LlmClient`] backed by openai-client.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: OpenAIClient,
    model: String,
}

impl OpenAILlmClient {
    pub fn new(
        api_key: String,
        base_url: String,
        params: CompletionParams,
    ) -> Result<Self, UpstreamError> {
        Ok(Self {
            client: OpenAIClient::with_base_url(api_key, base_url, params)?,
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Builds a client from any [`LlmConfig`] (endpoint, key, model, limits).
    pub fn from_config(config: &dyn LlmConfig) -> Result<Self, UpstreamError> {
        Ok(Self::new(
            config.api_key().to_string(),
            config.base_url().to_string(),
            config.params(),
        )?
        .with_model(config.model().to_string()))
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages), fields(turns = messages.len()))]
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, UpstreamError> {
        let openai_messages = messages
            .iter()
            .map(chat_message_to_openai)
            .collect::<Result<Vec<_>, _>>()?;
        self.client.chat_completion(&self.model, openai_messages).await
    }
}
