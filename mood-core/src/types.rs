//! Core types: sentiment label and the orchestrated reply triple.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse sentiment of a user message. Derived per message, never stored as authoritative state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Upper-case label as stored on chat records (`POSITIVE`, `NEGATIVE`, `NEUTRAL`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Negative => "NEGATIVE",
            Sentiment::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the orchestrator hands back to the chat service for one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodReply {
    pub response_text: String,
    pub sentiment: Sentiment,
    /// In `[0, 1]`; randomised within a band keyed by `sentiment`.
    pub mood_score: f64,
    /// True when the upstream call failed and `response_text` is a canned reply.
    pub is_fallback: bool,
}
