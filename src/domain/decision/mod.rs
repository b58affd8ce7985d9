//! Decision module - the input aggregate for one evaluation.

mod aggregate;

pub use aggregate::{Category, Decision, DecisionBuilder, DecisionOption};
