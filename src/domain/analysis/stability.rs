//! Stability analysis - does a plausible importance bump flip the winner?

use serde::{Deserialize, Serialize};

use crate::domain::decision::Decision;
use crate::domain::foundation::Importance;
use crate::domain::scoring::Aggregator;

/// Multiplier applied to one category's importance per perturbation.
pub const PERTURBATION_FACTOR: f64 = 1.5;

/// How much sway a category holds over the final recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Influence {
    /// The winner survives the perturbation.
    Low,
    /// A moderate importance increase alone flips the recommendation.
    High,
}

impl Influence {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Influence::Low => "Low",
            Influence::High => "High",
        }
    }
}

/// Stability verdict for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStability {
    pub title: String,
    pub importance: Importance,
    pub is_stable: bool,
    pub influence: Influence,
}

/// Per-category stability verdicts for a decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StabilityReport {
    pub categories: Vec<CategoryStability>,
}

impl StabilityReport {
    /// Returns true if no category can flip the recommendation.
    pub fn all_stable(&self) -> bool {
        self.categories.iter().all(|c| c.is_stable)
    }

    /// Returns the titles of high-influence categories.
    pub fn sensitive_categories(&self) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|c| !c.is_stable)
            .map(|c| c.title.as_str())
            .collect()
    }
}

/// One-sided finite-difference sensitivity test per category.
pub struct StabilityAnalyzer;

impl StabilityAnalyzer {
    /// Perturbs each category's importance by [`PERTURBATION_FACTOR`]
    /// (capped at 10) one at a time, re-scores the decision, and compares
    /// the perturbed winner against the baseline winner.
    ///
    /// # Edge Cases
    /// - Empty decision: empty report
    /// - Categories are perturbed independently, never jointly
    pub fn analyze(decision: &Decision) -> StabilityReport {
        if decision.is_empty() {
            return StabilityReport::default();
        }

        let baseline = Aggregator::score(decision);
        let importances: Vec<f64> = decision
            .categories
            .iter()
            .map(|c| c.importance.as_f64())
            .collect();

        let categories = decision
            .categories
            .iter()
            .enumerate()
            .map(|(category_index, category)| {
                let mut perturbed = importances.clone();
                perturbed[category_index] =
                    (perturbed[category_index] * PERTURBATION_FACTOR).min(10.0);

                let result = Aggregator::score_with_importances(decision, &perturbed);
                let is_stable = result.best_index == baseline.best_index;
                CategoryStability {
                    title: category.title.clone(),
                    importance: category.importance,
                    is_stable,
                    influence: if is_stable {
                        Influence::Low
                    } else {
                        Influence::High
                    },
                }
            })
            .collect();

        StabilityReport { categories }
    }
}
