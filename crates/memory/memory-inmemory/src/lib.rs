//! # In-Memory Conversation Store
//!
//! [`InMemoryConversationStore`] keeps each user's recent turns in process memory.
//!
//! **Limitations**:
//! - Data is lost on restart
//! - Not shared between processes
//!
//! ## Thread Safety
//!
//! The user map sits behind an `RwLock`; each user's history has its own `Mutex`. Requests for
//! different users only share the read lock, requests for the same user are serialized on
//! that user's mutex. The map write lock is taken only to create or remove a user, and no
//! lock is held across anything but lock acquisition.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use memory_core::{ConversationStore, MAX_HISTORY_TURNS, RECENT_WINDOW_TURNS};
use prompt::ChatMessage;
use tokio::sync::{Mutex, RwLock};

type History = Arc<Mutex<VecDeque<ChatMessage>>>;

/// In-memory per-user conversation history.
#[derive(Debug, Clone)]
pub struct InMemoryConversationStore {
    histories: Arc<RwLock<HashMap<String, History>>>,
    max_turns: usize,
    window_turns: usize,
}

impl InMemoryConversationStore {
    /// Creates an empty store with the default limits (10 kept, 6 in the window).
    pub fn new() -> Self {
        Self::with_limits(MAX_HISTORY_TURNS, RECENT_WINDOW_TURNS)
    }

    /// Creates an empty store keeping `max_turns` per user and returning `window_turns`.
    pub fn with_limits(max_turns: usize, window_turns: usize) -> Self {
        Self {
            histories: Arc::new(RwLock::new(HashMap::new())),
            max_turns,
            window_turns: window_turns.min(max_turns),
        }
    }

    /// Full retained history of `user_id`, oldest first.
    pub async fn history(&self, user_id: &str) -> Vec<ChatMessage> {
        let map = self.histories.read().await;
        match map.get(user_id) {
            Some(history) => history.lock().await.iter().cloned().collect(),
            None => Vec::new(),
        }
    }

    /// Number of users with a history entry.
    pub async fn user_count(&self) -> usize {
        self.histories.read().await.len()
    }

    fn push_exchange(
        &self,
        turns: &mut VecDeque<ChatMessage>,
        user_turn: ChatMessage,
        assistant_turn: ChatMessage,
    ) {
        turns.push_back(user_turn);
        turns.push_back(assistant_turn);
        while turns.len() > self.max_turns {
            turns.pop_front();
        }
    }
}

impl Default for InMemoryConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn append(
        &self,
        user_id: &str,
        user_turn: ChatMessage,
        assistant_turn: ChatMessage,
    ) -> Result<(), anyhow::Error> {
        {
            // Read guard stays held while appending so `clear` cannot detach the history.
            let map = self.histories.read().await;
            if let Some(history) = map.get(user_id) {
                let mut turns = history.lock().await;
                self.push_exchange(&mut turns, user_turn, assistant_turn);
                return Ok(());
            }
        }

        let mut map = self.histories.write().await;
        let history = map.entry(user_id.to_string()).or_default().clone();
        let mut turns = history.lock().await;
        self.push_exchange(&mut turns, user_turn, assistant_turn);
        tracing::debug!(user_id = %user_id, "created conversation history");
        Ok(())
    }

    async fn recent_window(&self, user_id: &str) -> Result<Vec<ChatMessage>, anyhow::Error> {
        let map = self.histories.read().await;
        let Some(history) = map.get(user_id) else {
            return Ok(Vec::new());
        };
        let turns = history.lock().await;
        let skip = turns.len().saturating_sub(self.window_turns);
        Ok(turns.iter().skip(skip).cloned().collect())
    }

    async fn clear(&self, user_id: &str) -> Result<(), anyhow::Error> {
        if self.histories.write().await.remove(user_id).is_some() {
            tracing::debug!(user_id = %user_id, "cleared conversation history");
        }
        Ok(())
    }
}
