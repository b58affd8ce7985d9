//! GetDecisionHandler - query one saved decision by id.

use std::sync::Arc;

use crate::domain::foundation::DecisionId;
use crate::ports::{DecisionRepository, StorageError, StoredDecision};

/// Query to fetch one decision.
#[derive(Debug, Clone)]
pub struct GetDecisionQuery {
    pub id: DecisionId,
}

/// Handler for fetching saved decisions.
pub struct GetDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl GetDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetDecisionQuery,
    ) -> Result<Option<StoredDecision>, StorageError> {
        self.repository.find_by_id(&query.id).await
    }
}
