//! # memory-core
//!
//! Short-term conversation memory: the [`ConversationStore`] trait and its limits.
//!
//! A store keeps, per user identifier, the most recent turns of that user's conversation
//! ([`MAX_HISTORY_TURNS`] at most, oldest evicted first) and serves the last
//! [`RECENT_WINDOW_TURNS`] of them as context for the next request.
//!
//! ## Implementations
//!
//! - `memory-inmemory`: process-local map with per-user locks; lost on restart.
//!
//! The trait is the swap point for a distributed cache; orchestration depends only on it.

mod store;

pub use store::{ConversationStore, MAX_HISTORY_TURNS, RECENT_WINDOW_TURNS};
