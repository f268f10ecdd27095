//! Test doubles for the orchestrator: scripted LLM clients and an instrumented store.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use llm_client::{LlmClient, UpstreamError};
use memory_core::ConversationStore;
use memory_inmemory::InMemoryConversationStore;
use prompt::ChatMessage;

/// Replies with a fixed text and records every request it receives.
#[derive(Default)]
pub struct ScriptedLlm {
    reply: String,
    pub requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedLlm {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn last_request(&self) -> Vec<ChatMessage> {
        self.requests.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, UpstreamError> {
        self.requests.lock().unwrap().push(messages.to_vec());
        Ok(self.reply.clone())
    }
}

/// Always fails with a transport error, counting calls.
#[derive(Default)]
pub struct FailingLlm {
    pub calls: AtomicUsize,
}

#[async_trait]
impl LlmClient for FailingLlm {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(UpstreamError::Transport("connection refused".to_string()))
    }
}

/// Wraps the in-memory store and counts every trait call.
#[derive(Default)]
pub struct CountingStore {
    pub inner: InMemoryConversationStore,
    pub appends: AtomicUsize,
    pub reads: AtomicUsize,
    pub clears: AtomicUsize,
}

impl CountingStore {
    pub fn total_calls(&self) -> usize {
        self.appends.load(Ordering::SeqCst)
            + self.reads.load(Ordering::SeqCst)
            + self.clears.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConversationStore for CountingStore {
    async fn append(
        &self,
        user_id: &str,
        user_turn: ChatMessage,
        assistant_turn: ChatMessage,
    ) -> Result<(), anyhow::Error> {
        self.appends.fetch_add(1, Ordering::SeqCst);
        self.inner.append(user_id, user_turn, assistant_turn).await
    }

    async fn recent_window(&self, user_id: &str) -> Result<Vec<ChatMessage>, anyhow::Error> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.recent_window(user_id).await
    }

    async fn clear(&self, user_id: &str) -> Result<(), anyhow::Error> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        self.inner.clear(user_id).await
    }
}

/// A store whose backend is down: every call errors.
pub struct BrokenStore;

#[async_trait]
impl ConversationStore for BrokenStore {
    async fn append(&self, _: &str, _: ChatMessage, _: ChatMessage) -> Result<(), anyhow::Error> {
        anyhow::bail!("cache unavailable")
    }

    async fn recent_window(&self, _: &str) -> Result<Vec<ChatMessage>, anyhow::Error> {
        anyhow::bail!("cache unavailable")
    }

    async fn clear(&self, _: &str) -> Result<(), anyhow::Error> {
        anyhow::bail!("cache unavailable")
    }
}
