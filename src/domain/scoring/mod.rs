//! Scoring module - the core evaluation pipeline.
//!
//! Raw metric cells are extracted to finite numbers, normalized per
//! category to [0, 1] with direction correction, then combined into one
//! importance²-weighted score per option. Everything here is pure and
//! stateless; the derived views in [`crate::domain::analysis`] reuse the
//! same normalization and weighting so the projections cannot drift from
//! the scores.

mod aggregator;
mod extract;
mod normalizer;

pub use aggregator::{Aggregator, ScoreResult};
pub use extract::extract_value;
pub use normalizer::{Normalizer, NEUTRAL_MIDPOINT};
