//! Chat record persistence.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use mood_core::Result;
use tokio::sync::RwLock;

use crate::models::ChatRecord;

#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Stores `record`, assigning a fresh id; returns the saved record.
    async fn save(&self, record: ChatRecord) -> Result<ChatRecord>;
    async fn find_by_id(&self, id: u64) -> Result<Option<ChatRecord>>;
    /// All records of `user_id`, newest first.
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<ChatRecord>>;
    /// Returns whether a record was removed.
    async fn delete(&self, id: u64) -> Result<bool>;
}

/// Process-local repository; ids start at 1 and only grow.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChatRepository {
    records: Arc<RwLock<BTreeMap<u64, ChatRecord>>>,
    next_id: Arc<AtomicU64>,
}

impl InMemoryChatRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn save(&self, mut record: ChatRecord) -> Result<ChatRecord> {
        record.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.records.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<ChatRecord>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<ChatRecord>> {
        let records = self.records.read().await;
        // Ids grow with insertion, so reverse id order breaks created_at ties newest-first.
        let mut found: Vec<ChatRecord> = records
            .values()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        Ok(self.records.write().await.remove(&id).is_some())
    }
}
