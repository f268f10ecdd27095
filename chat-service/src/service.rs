//! Chat service: resolves users, calls the orchestrator, persists authenticated chats.

use std::sync::Arc;

use mood_core::{MoodError, Result};
use mood_engine::ResponseOrchestrator;
use tracing::{info, instrument};

use crate::models::{ChatRecord, ChatRequest, ChatResponse};
use crate::repository::ChatRepository;
use crate::resolver::UserResolver;

/// **External interactions:**
/// - **ResponseOrchestrator**: one `respond` per message; `clear_history` on request.
/// - **ChatRepository**: saves authenticated chats, lists and deletes them.
/// - **UserResolver**: principal → user id.
#[derive(Clone)]
pub struct ChatService {
    orchestrator: ResponseOrchestrator,
    repository: Arc<dyn ChatRepository>,
    users: Arc<dyn UserResolver>,
}

impl ChatService {
    pub fn new(
        orchestrator: ResponseOrchestrator,
        repository: Arc<dyn ChatRepository>,
        users: Arc<dyn UserResolver>,
    ) -> Self {
        Self {
            orchestrator,
            repository,
            users,
        }
    }

    /// Authenticated flow: remembers the exchange and persists a chat record.
    #[instrument(skip_all)]
    pub async fn send_message(&self, request: &ChatRequest, principal: &str) -> Result<ChatResponse> {
        validate(request)?;
        let user_id = self.users.resolve(principal).await?;

        let reply = self
            .orchestrator
            .respond(&request.message, Some(&user_id))
            .await;

        let saved = self
            .repository
            .save(ChatRecord::new(user_id, request.message.clone(), &reply))
            .await?;
        info!(chat_id = saved.id, sentiment = %saved.sentiment, fallback = reply.is_fallback, "Chat saved");
        Ok(saved.into())
    }

    /// Anonymous flow: no conversation memory, nothing persisted.
    #[instrument(skip_all)]
    pub async fn send_anonymous_message(&self, request: &ChatRequest) -> Result<ChatResponse> {
        validate(request)?;
        let reply = self.orchestrator.respond(&request.message, None).await;
        Ok(ChatResponse {
            id: None,
            message: request.message.clone(),
            response: reply.response_text,
            sentiment: reply.sentiment,
            mood_score: reply.mood_score,
            created_at: None,
        })
    }

    /// Routes to the anonymous flow when the request asks for it or nobody is signed in.
    pub async fn send(&self, request: &ChatRequest, principal: Option<&str>) -> Result<ChatResponse> {
        match principal {
            Some(p) if !request.is_anonymous => self.send_message(request, p).await,
            _ => self.send_anonymous_message(request).await,
        }
    }

    /// Stored chats of the principal, newest first.
    pub async fn chat_history(&self, principal: &str) -> Result<Vec<ChatResponse>> {
        let user_id = self.users.resolve(principal).await?;
        let records = self.repository.find_by_user(&user_id).await?;
        Ok(records.into_iter().map(ChatResponse::from).collect())
    }

    /// Deletes one stored chat owned by the principal.
    #[instrument(skip(self, principal))]
    pub async fn delete_chat(&self, chat_id: u64, principal: &str) -> Result<()> {
        let chat = self
            .repository
            .find_by_id(chat_id)
            .await?
            .ok_or_else(|| MoodError::ChatNotFound(chat_id.to_string()))?;
        let user_id = self.users.resolve(principal).await?;
        if chat.user_id != user_id {
            return Err(MoodError::Unauthorized(chat_id.to_string()));
        }
        self.repository.delete(chat_id).await?;
        info!(chat_id, "Chat deleted");
        Ok(())
    }

    /// Forgets the short-term conversation context; stored chats are kept.
    pub async fn clear_history(&self, principal: &str) -> Result<()> {
        let user_id = self.users.resolve(principal).await?;
        self.orchestrator
            .clear_history(&user_id)
            .await
            .map_err(|e| MoodError::Repository(e.to_string()))
    }
}

fn validate(request: &ChatRequest) -> Result<()> {
    if request.message.trim().is_empty() {
        return Err(MoodError::InvalidInput("message must not be blank".to_string()));
    }
    Ok(())
}
