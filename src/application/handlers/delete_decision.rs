//! DeleteDecisionHandler - removes a saved decision.

use std::sync::Arc;

use crate::domain::foundation::DecisionId;
use crate::ports::{DecisionRepository, StorageError};

/// Command to delete a decision.
#[derive(Debug, Clone)]
pub struct DeleteDecisionCommand {
    pub id: DecisionId,
}

/// Handler for deleting decisions.
pub struct DeleteDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl DeleteDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: DeleteDecisionCommand) -> Result<(), StorageError> {
        self.repository.delete(&command.id).await?;
        tracing::info!(id = %command.id, "decision deleted");
        Ok(())
    }
}
