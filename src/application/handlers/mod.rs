//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

mod delete_decision;
mod evaluate_decision;
mod generate_feedback;
mod get_decision;
mod list_decisions;
mod save_decision;

pub use delete_decision::{DeleteDecisionCommand, DeleteDecisionHandler};
pub use evaluate_decision::{EvaluateDecisionCommand, EvaluateDecisionHandler};
pub use generate_feedback::{
    GenerateFeedbackCommand, GenerateFeedbackHandler, FALLBACK_FEEDBACK,
};
pub use get_decision::{GetDecisionHandler, GetDecisionQuery};
pub use list_decisions::{DecisionSummary, ListDecisionsHandler};
pub use save_decision::{SaveDecisionCommand, SaveDecisionHandler};
