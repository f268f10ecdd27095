//! Response orchestrator: entry point used by the chat service.

use std::sync::Arc;

use llm_client::LlmClient;
use memory_core::ConversationStore;
use mood_core::{MoodReply, Sentiment};
use prompt::ChatMessage;
use sentiment::{classify, mood_score};
use tracing::{debug, info, instrument, warn};

use crate::fallback::fallback_reply;

/// Ties classifier, prompt building, upstream completion, mood scoring and memory together.
///
/// **External interactions:**
/// - **LlmClient** (via `llm`): one completion per `respond`; no lock is held while waiting.
/// - **ConversationStore** (via `store`): read the recent window before the call, append the
///   exchange after a successful call. Never touched for anonymous requests.
#[derive(Clone)]
pub struct ResponseOrchestrator {
    llm: Arc<dyn LlmClient>,
    store: Arc<dyn ConversationStore>,
}

impl ResponseOrchestrator {
    /// Only stores dependencies; no I/O.
    pub fn new(llm: Arc<dyn LlmClient>, store: Arc<dyn ConversationStore>) -> Self {
        Self { llm, store }
    }

    /// Produces the reply, sentiment and mood score for `message`.
    ///
    /// `user_id = None` is the anonymous path: no history is read or written. On upstream
    /// failure the reply is a canned sentiment-matched text and memory is left unchanged.
    #[instrument(
        skip(self, message, user_id),
        fields(user_id = user_id.unwrap_or("anonymous"), message_len = message.len())
    )]
    pub async fn respond(&self, message: &str, user_id: Option<&str>) -> MoodReply {
        let sentiment = classify(message);
        debug!(sentiment = %sentiment, "Detected sentiment");

        let turns = self.build_turns(message, user_id, sentiment).await;

        let (response_text, is_fallback) = match self.llm.complete(&turns).await {
            Ok(text) => {
                info!(chars = text.chars().count(), "AI response generated");
                debug!(preview = %text.chars().take(100).collect::<String>(), "Reply preview");
                if let Some(uid) = user_id {
                    self.remember(uid, message, &text).await;
                }
                (text, false)
            }
            Err(e) => {
                warn!(error = %e, sentiment = %sentiment, "Upstream completion failed, using fallback");
                (fallback_reply(sentiment).to_string(), true)
            }
        };

        MoodReply {
            response_text,
            sentiment,
            mood_score: mood_score(sentiment),
            is_fallback,
        }
    }

    /// Builds the outbound turns: system prompt for `sentiment`, the user's recent window when
    /// `user_id` is known, then the new message. Reads the store, never writes it.
    pub async fn build_turns(
        &self,
        message: &str,
        user_id: Option<&str>,
        sentiment: Sentiment,
    ) -> Vec<ChatMessage> {
        let history = match user_id {
            Some(uid) => match self.store.recent_window(uid).await {
                Ok(window) => window,
                Err(e) => {
                    warn!(error = %e, user_id = %uid, "Failed to read conversation window, continuing without history");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        debug!(history_turns = history.len(), "Built conversation context");
        prompt::build_messages(sentiment, history, message)
    }

    /// Forgets the short-term conversation of `user_id`.
    pub async fn clear_history(&self, user_id: &str) -> anyhow::Result<()> {
        self.store.clear(user_id).await
    }

    async fn remember(&self, user_id: &str, message: &str, reply: &str) {
        if let Err(e) = self
            .store
            .append(user_id, ChatMessage::user(message), ChatMessage::assistant(reply))
            .await
        {
            warn!(error = %e, user_id = %user_id, "Failed to store conversation turn");
        }
    }
}
