//! Aggregator - importance-squared weighted scoring and winner selection.

use serde::{Deserialize, Serialize};

use super::Normalizer;
use crate::domain::decision::Decision;

/// One real-valued score per option, plus the recommended option.
///
/// Derived, never persisted; recomputed on every evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub scores: Vec<f64>,
    /// Index of the best option; `None` when there is nothing to score.
    pub best_index: Option<usize>,
}

impl ScoreResult {
    /// An empty result for degenerate input.
    pub fn empty() -> Self {
        Self {
            scores: Vec::new(),
            best_index: None,
        }
    }

    /// Returns the best option's score, if any.
    pub fn best_score(&self) -> Option<f64> {
        self.best_index.map(|i| self.scores[i])
    }

    /// Returns true if nothing was scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Stateless scoring over a decision's input tables.
pub struct Aggregator;

impl Aggregator {
    /// Converts an importance into its scoring weight: `importance²`.
    ///
    /// Exponential weighting makes high-importance categories dominate
    /// rather than blend proportionally: a 10 outweighs a 1 by 100x.
    pub fn weight(importance: f64) -> f64 {
        importance * importance
    }

    /// Scores every option using each category's own importance.
    ///
    /// Each option's score is the sum over categories of
    /// `normalized_value x weight(importance)`. The best option is the
    /// first occurrence of the maximum score.
    ///
    /// # Edge Cases
    /// - Zero options or zero categories: empty scores, no best option
    /// - Zero-variance categories contribute the neutral midpoint per
    ///   option, not zero
    pub fn score(decision: &Decision) -> ScoreResult {
        let importances: Vec<f64> = decision
            .categories
            .iter()
            .map(|c| c.importance.as_f64())
            .collect();
        Self::score_with_importances(decision, &importances)
    }

    /// Scores every option with the given effective importances, one per
    /// category. Fractional importances are allowed; the sensitivity
    /// projection uses this to perturb a single category.
    pub fn score_with_importances(decision: &Decision, importances: &[f64]) -> ScoreResult {
        if decision.is_empty() {
            return ScoreResult::empty();
        }

        let mut scores = vec![0.0; decision.option_count()];
        for (category_index, _) in decision.categories.iter().enumerate() {
            let values = decision.extracted_row(category_index);
            let normalized = Normalizer::normalize(&values, decision.metric_type(category_index));
            let weight = Self::weight(
                importances
                    .get(category_index)
                    .copied()
                    .unwrap_or_default(),
            );
            for (option_index, n) in normalized.iter().enumerate() {
                scores[option_index] += n * weight;
            }
        }

        let best_index = Self::first_max_index(&scores);
        ScoreResult { scores, best_index }
    }

    /// Returns the index of the first maximum, ties resolving to the
    /// lowest index.
    fn first_max_index(scores: &[f64]) -> Option<usize> {
        if scores.is_empty() {
            return None;
        }
        let mut best = 0;
        for (index, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = index;
            }
        }
        Some(best)
    }
}
