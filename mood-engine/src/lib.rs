//! # mood-engine
//!
//! The conversation-context and response-orchestration engine.
//!
//! [`ResponseOrchestrator::respond`] classifies the message, builds the outbound turns
//! (sentiment-keyed system prompt + the user's recent window + the new message), asks the
//! [`LlmClient`](llm_client::LlmClient) for a completion, remembers the exchange on success and
//! falls back to a canned reply on failure. Upstream failures never surface as errors.
//!
//! ## Modules
//!
//! - [`orchestrator`] – `ResponseOrchestrator`
//! - [`fallback`] – canned per-sentiment replies

pub mod fallback;
pub mod orchestrator;

pub use fallback::{fallback_replies, fallback_reply, fallback_reply_with};
pub use orchestrator::ResponseOrchestrator;
