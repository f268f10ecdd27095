//! # Conversation Store
//!
//! ## ConversationStore Trait
//!
//! #### `append(&self, user_id, user_turn, assistant_turn)`
//!
//! Pushes the user turn then the assistant turn onto the user's history and evicts the oldest
//! turns beyond the cap. Both turns land together; concurrent appends for one user never
//! interleave or get lost.
//!
//! #### `recent_window(&self, user_id) -> Vec<ChatMessage>`
//!
//! Up to the last [`RECENT_WINDOW_TURNS`] turns in original order; empty for unknown users.
//!
//! #### `clear(&self, user_id)`
//!
//! Forgets the user's history. Idempotent.
//!
//! ### Example Usage
//!
//! ```rust,ignore
//! async fn remember(store: &dyn ConversationStore) -> anyhow::Result<()> {
//!     store
//!         .append("42", ChatMessage::user("hi"), ChatMessage::assistant("hello!"))
//!         .await?;
//!     let window = store.recent_window("42").await?;
//!     assert_eq!(window.len(), 2);
//!     store.clear("42").await
//! }
//! ```

use async_trait::async_trait;
use prompt::ChatMessage;

/// Most turns kept per user (5 exchanges).
pub const MAX_HISTORY_TURNS: usize = 10;

/// Most turns returned as context (3 exchanges).
pub const RECENT_WINDOW_TURNS: usize = 6;

/// Per-user bounded conversation history.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Appends one exchange (user turn, then assistant turn) and enforces the cap.
    async fn append(
        &self,
        user_id: &str,
        user_turn: ChatMessage,
        assistant_turn: ChatMessage,
    ) -> Result<(), anyhow::Error>;

    /// Returns the most recent turns of `user_id`, oldest first.
    async fn recent_window(&self, user_id: &str) -> Result<Vec<ChatMessage>, anyhow::Error>;

    /// Removes all history of `user_id`; no-op when there is none.
    async fn clear(&self, user_id: &str) -> Result<(), anyhow::Error>;
}
