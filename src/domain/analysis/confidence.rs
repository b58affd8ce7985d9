//! Confidence estimation - how decisive is the score separation?

use serde::{Deserialize, Serialize};

use crate::domain::scoring::ScoreResult;

/// Score range above this fraction of the maximum is High confidence.
pub const HIGH_SEPARATION: f64 = 0.3;

/// Score range above this fraction of the maximum is Medium confidence.
pub const MEDIUM_SEPARATION: f64 = 0.15;

/// Qualitative confidence tier for the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

/// Classification of the gap between best and worst scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceReport {
    pub level: ConfidenceLevel,
}

/// Classifies score separation into a confidence tier.
pub struct ConfidenceEstimator;

impl ConfidenceEstimator {
    /// Estimates confidence from a score vector.
    ///
    /// `range = max - min`; High when `range > 0.3 x max`, Medium when
    /// `range > 0.15 x max`, otherwise Low.
    ///
    /// # Edge Cases
    /// - Empty scores or `max <= 0`: Low (no division by zero)
    pub fn estimate(result: &ScoreResult) -> ConfidenceReport {
        ConfidenceReport {
            level: Self::classify(&result.scores),
        }
    }

    fn classify(scores: &[f64]) -> ConfidenceLevel {
        let Some(&first) = scores.first() else {
            return ConfidenceLevel::Low;
        };
        let (min, max) = scores.iter().fold((first, first), |(min, max), &s| {
            (min.min(s), max.max(s))
        });
        if max <= 0.0 {
            return ConfidenceLevel::Low;
        }

        let range = max - min;
        if range > HIGH_SEPARATION * max {
            ConfidenceLevel::High
        } else if range > MEDIUM_SEPARATION * max {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}
