//! ListDecisionsHandler - query all saved decisions as summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::foundation::DecisionId;
use crate::ports::{DecisionRepository, StorageError, StoredDecision};

/// A lightweight listing entry for one saved decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionSummary {
    pub id: DecisionId,
    pub created_at: DateTime<Utc>,
    pub option_count: usize,
    pub category_count: usize,
    pub main_consideration: String,
}

impl From<&StoredDecision> for DecisionSummary {
    fn from(record: &StoredDecision) -> Self {
        Self {
            id: record.id,
            created_at: record.created_at,
            option_count: record.decision.option_count(),
            category_count: record.decision.category_count(),
            main_consideration: record.decision.main_consideration.clone(),
        }
    }
}

/// Handler for listing saved decisions.
pub struct ListDecisionsHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl ListDecisionsHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<DecisionSummary>, StorageError> {
        let records = self.repository.list().await?;
        Ok(records.iter().map(DecisionSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryDecisionRepository;
    use crate::domain::decision::Decision;

    #[tokio::test]
    async fn handler_lists_summaries() {
        let repository = Arc::new(InMemoryDecisionRepository::new());
        let mut decision = Decision::default();
        decision.main_consideration = "which laptop".to_string();
        repository
            .save(&StoredDecision::new(decision))
            .await
            .unwrap();

        let handler = ListDecisionsHandler::new(repository);
        let summaries = handler.handle().await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].main_consideration, "which laptop");
        assert_eq!(summaries[0].option_count, 0);
    }

    #[tokio::test]
    async fn handler_lists_empty_store() {
        let handler = ListDecisionsHandler::new(Arc::new(InMemoryDecisionRepository::new()));
        assert!(handler.handle().await.unwrap().is_empty());
    }
}
