//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DecisionRepository` - persistence for saved decisions
//! - `FeedbackProvider` - external AI feedback generation

mod decision_repository;
mod feedback_provider;

pub use decision_repository::{DecisionRepository, StorageError, StoredDecision};
pub use feedback_provider::{
    ChoiceConsideration, Feedback, FeedbackError, FeedbackProvider, FeedbackRequest, ScoredOption,
};
