//! Assembly: builds the LLM client and conversation store and wires the orchestrator.

use std::sync::Arc;

use anyhow::{Context, Result};
use llm_client::{LlmClient, LlmConfig, OpenAILlmClient};
use memory_core::ConversationStore;
use memory_inmemory::InMemoryConversationStore;
use mood_engine::ResponseOrchestrator;
use tracing::info;

/// Builds the orchestrator from config. Fails fast on an unusable configuration.
pub fn build_orchestrator(config: &dyn LlmConfig) -> Result<ResponseOrchestrator> {
    let params = config.params();
    info!(
        base_url = %config.base_url(),
        model = %config.model(),
        max_tokens = params.max_tokens,
        timeout_secs = params.timeout.as_secs(),
        "Building LLM client"
    );

    let llm: Arc<dyn LlmClient> =
        Arc::new(OpenAILlmClient::from_config(config).context("Build LLM client")?);
    let store: Arc<dyn ConversationStore> = Arc::new(InMemoryConversationStore::new());
    Ok(ResponseOrchestrator::new(llm, store))
}
