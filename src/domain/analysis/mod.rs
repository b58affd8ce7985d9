//! Analysis module - derived views over scored decisions.
//!
//! Every projection here is an arithmetic lens over the same scoring
//! pipeline: category bar percentages, per-option pie shares,
//! stability under importance perturbation, risk exposure, and the
//! confidence tier. All functions are pure and stateless; they reuse the
//! Normalizer and Aggregator so no view can drift from the scores.
//!
//! The projections are independent of one another and read-only over the
//! decision, so callers may compute them concurrently; the combined
//! [`DecisionEvaluator`] simply runs them in sequence since inputs are
//! small.

mod category_breakdown;
mod confidence;
mod option_breakdown;
mod report;
mod risk;
mod stability;

pub use category_breakdown::{CategoryBreakdown, CategoryBreakdownProjector, OptionShare};
pub use confidence::{
    ConfidenceEstimator, ConfidenceLevel, ConfidenceReport, HIGH_SEPARATION, MEDIUM_SEPARATION,
};
pub use option_breakdown::{CategoryContribution, OptionBreakdown, OptionBreakdownProjector};
pub use report::{DecisionEvaluator, DecisionReport};
pub use risk::{
    OptionRisk, RiskAnalyzer, RiskLevel, RiskReport, HIGH_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD,
};
pub use stability::{
    CategoryStability, Influence, StabilityAnalyzer, StabilityReport, PERTURBATION_FACTOR,
};
