//! Request/response DTOs and the persisted chat record.

use chrono::{DateTime, Utc};
use mood_core::{MoodReply, Sentiment};
use serde::{Deserialize, Serialize};

/// Inbound chat message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatRequest {
    pub message: String,
    pub is_anonymous: bool,
    /// Requested personality ("supportive", "casual", ...). Carried, not yet used by prompts.
    pub mode: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

/// One stored exchange of an authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRecord {
    /// Assigned by the repository on save; 0 before.
    pub id: u64,
    pub user_id: String,
    pub message: String,
    pub response: String,
    pub sentiment: Sentiment,
    pub mood_score: f64,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
}

impl ChatRecord {
    /// Creates an unsaved record for `user_id` from an orchestrated reply.
    pub fn new(user_id: impl Into<String>, message: impl Into<String>, reply: &MoodReply) -> Self {
        Self {
            id: 0,
            user_id: user_id.into(),
            message: message.into(),
            response: reply.response_text.clone(),
            sentiment: reply.sentiment,
            mood_score: reply.mood_score,
            is_anonymous: false,
            created_at: Utc::now(),
        }
    }
}

/// Outbound chat result. `id` and `created_at` are absent for anonymous chats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub message: String,
    pub response: String,
    pub sentiment: Sentiment,
    pub mood_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<ChatRecord> for ChatResponse {
    fn from(record: ChatRecord) -> Self {
        Self {
            id: Some(record.id),
            message: record.message,
            response: record.response,
            sentiment: record.sentiment,
            mood_score: record.mood_score,
            created_at: Some(record.created_at),
        }
    }
}
