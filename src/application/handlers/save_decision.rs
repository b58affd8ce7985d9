//! SaveDecisionHandler - persists a decision and returns its record.

use std::sync::Arc;

use crate::domain::decision::Decision;
use crate::ports::{DecisionRepository, StorageError, StoredDecision};

/// Command to save a decision.
#[derive(Debug, Clone)]
pub struct SaveDecisionCommand {
    pub decision: Decision,
}

/// Handler for saving decisions.
pub struct SaveDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl SaveDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        command: SaveDecisionCommand,
    ) -> Result<StoredDecision, StorageError> {
        let record = StoredDecision::new(command.decision);
        self.repository.save(&record).await?;
        tracing::info!(id = %record.id, "decision saved");
        Ok(record)
    }
}
