//! Maps an authenticated principal (e.g. an email from a verified token) to a user id.

use std::collections::HashMap;

use async_trait::async_trait;
use mood_core::{MoodError, Result};

#[async_trait]
pub trait UserResolver: Send + Sync {
    /// Stable user id for `principal`, or `MoodError::UserNotFound`.
    async fn resolve(&self, principal: &str) -> Result<String>;
}

/// Fixed principal → user id table.
#[derive(Debug, Clone, Default)]
pub struct StaticUserResolver {
    users: HashMap<String, String>,
}

impl StaticUserResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, principal: impl Into<String>, user_id: impl Into<String>) -> Self {
        self.users.insert(principal.into(), user_id.into());
        self
    }
}

#[async_trait]
impl UserResolver for StaticUserResolver {
    async fn resolve(&self, principal: &str) -> Result<String> {
        self.users
            .get(principal)
            .cloned()
            .ok_or_else(|| MoodError::UserNotFound(principal.to_string()))
    }
}
