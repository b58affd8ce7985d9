//! Decision repository port - persistence contract for saved decisions.
//!
//! The scoring pipeline never touches storage; decisions are saved and
//! recalled as whole records keyed by [`DecisionId`]. Implementations
//! handle the actual backing store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::decision::Decision;
use crate::domain::foundation::DecisionId;

/// A persisted decision with its storage metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDecision {
    pub id: DecisionId,
    pub decision: Decision,
    pub created_at: DateTime<Utc>,
}

impl StoredDecision {
    /// Wraps a decision in a new record, stamped with the current time.
    pub fn new(decision: Decision) -> Self {
        Self {
            id: DecisionId::new(),
            decision,
            created_at: Utc::now(),
        }
    }
}

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No record with the given id.
    #[error("decision not found: {0}")]
    NotFound(DecisionId),

    /// The backing store failed.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Repository port for saved decisions.
#[async_trait]
pub trait DecisionRepository: Send + Sync {
    /// Save a new record (or overwrite the record with the same id).
    async fn save(&self, record: &StoredDecision) -> Result<(), StorageError>;

    /// Find a record by its id. Returns `None` if not found.
    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<StoredDecision>, StorageError>;

    /// List all records, most recently created first.
    async fn list(&self) -> Result<Vec<StoredDecision>, StorageError>;

    /// Delete a record.
    ///
    /// # Errors
    /// - `NotFound` if no record has the given id
    async fn delete(&self, id: &DecisionId) -> Result<(), StorageError>;
}
