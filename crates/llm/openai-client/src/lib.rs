//! # OpenAI API client
//!
//! Thin wrapper around [async-openai] for non-streaming chat completion against any
//! OpenAI-compatible endpoint (OpenAI, Groq, local proxies).
//!
//! - Sends `{model, messages, max_tokens, temperature}` with bearer authentication.
//! - Bounds the whole call, retries included, by [`CompletionParams::timeout`].
//! - Returns the first choice's content verbatim or a typed [`UpstreamError`].
//! - Masks the API key in logs via [`mask_token`].

use std::sync::Arc;
use std::time::Duration;

use async_openai::error::OpenAIError;
use async_openai::types::CreateChatCompletionRequestArgs;
use async_openai::Client;
use thiserror::Error;

pub use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};

/// Why an upstream completion could not produce text.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("upstream call timed out after {0:?}")]
    Timeout(Duration),

    #[error("transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status with an error body from the provider.
    #[error("provider error: {0}")]
    Api(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("response contained no choices")]
    EmptyChoices,

    #[error("first choice has no message content")]
    MissingContent,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<OpenAIError> for UpstreamError {
    fn from(e: OpenAIError) -> Self {
        match e {
            OpenAIError::Reqwest(e) => UpstreamError::Transport(e.to_string()),
            OpenAIError::ApiError(e) => UpstreamError::Api(e.message),
            OpenAIError::JSONDeserialize(e) => UpstreamError::Malformed(e.to_string()),
            OpenAIError::InvalidArgument(msg) => UpstreamError::InvalidRequest(msg),
            other => UpstreamError::Transport(other.to_string()),
        }
    }
}

/// Fixed generation parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    pub max_tokens: u32,
    pub temperature: f32,
    /// Upper bound for one completion call.
    pub timeout: Duration,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.9,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11 chars, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[len - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// OpenAI chat client. Wraps async-openai client; holds the API key only for masked logging.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    masked_key: String,
    params: CompletionParams,
}

impl OpenAIClient {
    /// Builds a client for `base_url` (e.g. `https://api.groq.com/openai/v1`); requests go to
    /// `{base_url}/chat/completions`.
    pub fn with_base_url(
        api_key: String,
        base_url: String,
        params: CompletionParams,
    ) -> Result<Self, UpstreamError> {
        let masked_key = mask_token(&api_key);
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        let http = reqwest::Client::builder()
            .timeout(params.timeout)
            .build()
            .map_err(|e| UpstreamError::InvalidRequest(format!("http client: {e}")))?;
        let client = Client::with_config(config).with_http_client(http);
        Ok(Self {
            client: Arc::new(client),
            masked_key,
            params,
        })
    }

    /// Sends a chat completion request and returns the first choice's content verbatim.
    ///
    /// Logs model, message count, masked API key and token usage.
    #[allow(deprecated)]
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> Result<String, UpstreamError> {
        tracing::info!(
            model = %model,
            message_count = messages.len(),
            max_tokens = self.params.max_tokens,
            api_key = %self.masked_key,
            "chat_completion request"
        );

        // `max_tokens` is what OpenAI-compatible providers such as Groq accept.
        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .max_tokens(self.params.max_tokens)
            .temperature(self.params.temperature)
            .build()?;

        if tracing::enabled!(tracing::Level::TRACE) {
            if let Ok(json) = serde_json::to_string_pretty(&request) {
                tracing::trace!(request_json = %json, "chat_completion request JSON");
            }
        }

        let response = tokio::time::timeout(self.params.timeout, self.client.chat().create(request))
            .await
            .map_err(|_| UpstreamError::Timeout(self.params.timeout))??;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "chat_completion usage"
            );
        }

        let choice = response.choices.into_iter().next().ok_or(UpstreamError::EmptyChoices)?;
        choice.message.content.ok_or(UpstreamError::MissingContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_provider_settings() {
        let p = CompletionParams::default();
        assert_eq!(p.max_tokens, 500);
        assert!((p.temperature - 0.9).abs() < f32::EPSILON);
        assert_eq!(p.timeout, Duration::from_secs(30));
    }

    #[test]
    fn invalid_argument_maps_to_invalid_request() {
        let e: UpstreamError = OpenAIError::InvalidArgument("bad".into()).into();
        assert!(matches!(e, UpstreamError::InvalidRequest(m) if m == "bad"));
    }
}
