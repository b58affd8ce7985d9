//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Wisest domain.

mod errors;
mod ids;
mod importance;
mod metric_type;
mod raw_metric;

pub use errors::ValidationError;
pub use ids::DecisionId;
pub use importance::Importance;
pub use metric_type::MetricType;
pub use raw_metric::RawMetric;
