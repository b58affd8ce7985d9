//! Category breakdown - per-category bar percentages for ranked display.

use serde::{Deserialize, Serialize};

use crate::domain::decision::Decision;
use crate::domain::foundation::Importance;

/// One option's share of a category, as a bar-length percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionShare {
    pub option_name: String,
    pub percentage: f64,
}

/// One category's ranked option shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub title: String,
    pub importance: Importance,
    /// 1-based display rank; categories are ordered by importance.
    pub rank: usize,
    /// Option shares, highest percentage first.
    pub shares: Vec<OptionShare>,
}

/// Projects a decision into per-category bar percentages.
pub struct CategoryBreakdownProjector;

impl CategoryBreakdownProjector {
    /// Builds breakdowns for every category, ordered by importance
    /// descending (stable for equal importance).
    ///
    /// A share is `round(adjusted / max_raw x 100) x (importance / 10)`,
    /// where `adjusted` re-expresses lower-is-better values on the raw
    /// scale so the cheapest option fills the longest bar. Non-finite
    /// intermediate results collapse to `0`.
    pub fn project(decision: &Decision) -> Vec<CategoryBreakdown> {
        let mut order: Vec<usize> = (0..decision.category_count()).collect();
        order.sort_by(|&a, &b| {
            decision.categories[b]
                .importance
                .cmp(&decision.categories[a].importance)
        });

        order
            .into_iter()
            .enumerate()
            .map(|(rank, category_index)| {
                Self::project_category(decision, category_index, rank + 1)
            })
            .collect()
    }

    fn project_category(
        decision: &Decision,
        category_index: usize,
        rank: usize,
    ) -> CategoryBreakdown {
        let category = &decision.categories[category_index];
        let values = decision.extracted_row(category_index);
        let metric_type = decision.metric_type(category_index);

        let max_raw = values.iter().cloned().fold(f64::MIN, f64::max);
        let min_raw = values.iter().cloned().fold(f64::MAX, f64::min);
        let range = max_raw - min_raw;

        let mut shares: Vec<OptionShare> = decision
            .options
            .iter()
            .zip(values.iter())
            .map(|(option, &value)| {
                let adjusted = if metric_type.is_inverted() && range > 0.0 {
                    (1.0 - (value - min_raw) / range) * max_raw
                } else {
                    value
                };
                OptionShare {
                    option_name: option.name.clone(),
                    percentage: Self::percentage(adjusted, max_raw, category.importance),
                }
            })
            .collect();

        shares.sort_by(|a, b| {
            b.percentage
                .partial_cmp(&a.percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        CategoryBreakdown {
            title: category.title.clone(),
            importance: category.importance,
            rank,
            shares,
        }
    }

    /// Bar-length percentage for one contribution against the category
    /// maximum, scaled by importance.
    ///
    /// # Edge Cases
    /// - `category_max == 0` or non-finite result: `0`
    pub fn percentage(contribution: f64, category_max: f64, importance: Importance) -> f64 {
        let raw = (contribution / category_max * 100.0).round();
        if !raw.is_finite() {
            return 0.0;
        }
        raw * (importance.as_f64() / 10.0)
    }
}
