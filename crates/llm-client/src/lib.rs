//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and an OpenAI-compatible implementation. The trait is the
//! pluggable transport seam: the orchestrator depends on `Arc<dyn LlmClient>`, tests plug in
//! scripted mocks.
//!
//! Failures come back as a typed [`UpstreamError`] instead of being raised, so callers can
//! choose a fallback by pattern matching.

use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};
use prompt::{ChatMessage, MessageRole};

mod config;
mod openai_llm;

pub use config::{EnvLlmConfig, LlmConfig};
pub use openai_client::{CompletionParams, UpstreamError};
pub use openai_llm::OpenAILlmClient;

/// LLM client interface: one non-streaming completion for an ordered list of turns.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends `messages` as-is (the caller supplies the system turn) and returns the reply text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, UpstreamError>;
}

/// Converts a single [`ChatMessage`] into OpenAI API message format.
fn chat_message_to_openai(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage, UpstreamError> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_each_role() {
        let converted: Vec<_> = [
            ChatMessage::system("s"),
            ChatMessage::user("u"),
            ChatMessage::assistant("a"),
        ]
        .iter()
        .map(chat_message_to_openai)
        .collect::<Result<_, _>>()
        .unwrap();
        assert!(matches!(converted[0], ChatCompletionRequestMessage::System(_)));
        assert!(matches!(converted[1], ChatCompletionRequestMessage::User(_)));
        assert!(matches!(converted[2], ChatCompletionRequestMessage::Assistant(_)));
    }
}
