//! HTTP DTOs for the decision API.
//!
//! The domain view models are already designed for serialization, so
//! responses re-export them directly; only requests need translation.

pub use crate::domain::analysis::DecisionReport;
pub use crate::ports::Feedback;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::decision::{Category, Decision, DecisionOption};
use crate::domain::foundation::{
    DecisionId, Importance, MetricType, RawMetric, ValidationError,
};
use crate::ports::StoredDecision;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// An option on the wire: `{ "name": "..." }`.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionDto {
    pub name: String,
}

/// A category on the wire; metrics are `number | string | null`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDto {
    pub title: String,
    #[serde(default)]
    pub metrics: Vec<RawMetric>,
    pub importance: u8,
}

/// The decision input accepted by evaluate, feedback, and save.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionRequest {
    pub options: Vec<OptionDto>,
    pub categories: Vec<CategoryDto>,
    /// Integer codes 0-4, index-aligned with `categories`.
    #[serde(default)]
    pub metric_types: Vec<u8>,
    #[serde(default)]
    pub main_consideration: String,
    #[serde(default)]
    pub choice_considerations: HashMap<String, String>,
}

impl DecisionRequest {
    /// Translates the wire shape into the domain aggregate.
    ///
    /// Importance values clamp to 0-10; unknown metric type codes are
    /// rejected.
    pub fn into_domain(self) -> Result<Decision, ValidationError> {
        let metric_types = self
            .metric_types
            .into_iter()
            .map(MetricType::try_from_code)
            .collect::<Result<Vec<_>, _>>()?;

        let options = self
            .options
            .into_iter()
            .map(|o| DecisionOption::new(o.name))
            .collect();
        let categories = self
            .categories
            .into_iter()
            .map(|c| Category::new(c.title, c.metrics, Importance::new(c.importance)))
            .collect();

        let mut decision = Decision::new(options, categories, metric_types);
        decision.main_consideration = self.main_consideration;
        decision.choice_considerations = self.choice_considerations;
        Ok(decision)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a newly saved decision.
#[derive(Debug, Clone, Serialize)]
pub struct SavedDecisionResponse {
    pub id: DecisionId,
    pub created_at: DateTime<Utc>,
}

impl From<&StoredDecision> for SavedDecisionResponse {
    fn from(record: &StoredDecision) -> Self {
        Self {
            id: record.id,
            created_at: record.created_at,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
