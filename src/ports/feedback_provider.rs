//! Feedback provider port - interface for AI feedback generation.
//!
//! The numeric evaluation never depends on this port; feedback is an
//! augmentation. Implementations connect to an external text-generation
//! service and translate between its API and our payload.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::analysis::DecisionReport;
use crate::domain::decision::{Category, Decision};

/// One option's computed score, paired for the feedback payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredOption {
    pub option: String,
    pub score: f64,
}

/// A per-option free-text note from the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceConsideration {
    pub option: String,
    pub consideration: String,
}

/// Structured payload sent to the feedback service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub options: Vec<String>,
    pub categories: Vec<Category>,
    pub scores: Vec<ScoredOption>,
    pub best_decision: String,
    pub main_consideration: String,
    pub choice_considerations: Vec<ChoiceConsideration>,
}

impl FeedbackRequest {
    /// Builds the payload from a decision and its evaluation.
    pub fn from_evaluation(decision: &Decision, report: &DecisionReport) -> Self {
        let options = decision.option_names();
        let scores = options
            .iter()
            .zip(report.scores.iter())
            .map(|(option, &score)| ScoredOption {
                option: option.clone(),
                score,
            })
            .collect();
        let choice_considerations = options
            .iter()
            .filter_map(|option| {
                decision
                    .choice_considerations
                    .get(option)
                    .map(|note| ChoiceConsideration {
                        option: option.clone(),
                        consideration: note.clone(),
                    })
            })
            .collect();

        Self {
            options,
            categories: decision.categories.clone(),
            scores,
            best_decision: report.best_option.clone().unwrap_or_default(),
            main_consideration: decision.main_consideration.clone(),
            choice_considerations,
        }
    }
}

/// Free-text feedback returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub feedback: String,
}

impl Feedback {
    /// Creates feedback from text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            feedback: text.into(),
        }
    }
}

/// Feedback service errors.
#[derive(Debug, Error)]
pub enum FeedbackError {
    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl FeedbackError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FeedbackError::RateLimited { .. }
                | FeedbackError::Unavailable { .. }
                | FeedbackError::Network(_)
                | FeedbackError::Timeout { .. }
        )
    }
}

/// Port for AI feedback generation.
#[async_trait]
pub trait FeedbackProvider: Send + Sync {
    /// Generate natural-language feedback for an evaluated decision.
    async fn generate(&self, request: FeedbackRequest) -> Result<Feedback, FeedbackError>;

    /// Provider name, for logging.
    fn provider_name(&self) -> &'static str;
}
