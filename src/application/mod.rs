//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) are separated from query handlers (read).

pub mod handlers;

pub use handlers::{
    DecisionSummary, DeleteDecisionCommand, DeleteDecisionHandler, EvaluateDecisionCommand,
    EvaluateDecisionHandler, GenerateFeedbackCommand, GenerateFeedbackHandler, GetDecisionHandler,
    GetDecisionQuery, ListDecisionsHandler, SaveDecisionCommand, SaveDecisionHandler,
    FALLBACK_FEEDBACK,
};
