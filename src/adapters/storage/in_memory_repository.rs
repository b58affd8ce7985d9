//! In-Memory Decision Repository Adapter
//!
//! Stores decision records in memory. The production deployment of the
//! original backend keeps decisions in an in-process map as well, so this
//! is both the test double and the default store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DecisionId;
use crate::ports::{DecisionRepository, StorageError, StoredDecision};

/// In-memory store for decision records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDecisionRepository {
    records: Arc<RwLock<HashMap<DecisionId, StoredDecision>>>,
}

impl InMemoryDecisionRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored records (useful for tests).
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }

    /// Get the number of stored records.
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl DecisionRepository for InMemoryDecisionRepository {
    async fn save(&self, record: &StoredDecision) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<StoredDecision>, StorageError> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<StoredDecision>, StorageError> {
        let records = self.records.read().await;
        let mut all: Vec<StoredDecision> = records.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn delete(&self, id: &DecisionId) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        records
            .remove(id)
            .map(|_| ())
            .ok_or(StorageError::NotFound(*id))
    }
}
