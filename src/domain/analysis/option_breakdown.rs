//! Option breakdown - per-option category contributions (pie shares).

use serde::{Deserialize, Serialize};

use crate::domain::decision::Decision;
use crate::domain::scoring::{Aggregator, Normalizer};

/// One category's contribution to an option's total score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryContribution {
    pub category_title: String,
    pub contribution: f64,
}

/// One option's score decomposed by category.
///
/// Contributions sum to the option's total score; consumers render
/// relative slice sizes from the raw magnitudes, so there is no
/// re-normalization to 100%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionBreakdown {
    pub option_name: String,
    pub contributions: Vec<CategoryContribution>,
}

impl OptionBreakdown {
    /// Sum of all contributions, equal to the option's aggregate score.
    pub fn total(&self) -> f64 {
        self.contributions.iter().map(|c| c.contribution).sum()
    }
}

/// Projects a decision into per-option contribution breakdowns.
pub struct OptionBreakdownProjector;

impl OptionBreakdownProjector {
    /// Builds a breakdown for every option using the same normalization
    /// and weighting as the Aggregator.
    pub fn project(decision: &Decision) -> Vec<OptionBreakdown> {
        let per_category: Vec<(String, Vec<f64>, f64)> = decision
            .categories
            .iter()
            .enumerate()
            .map(|(category_index, category)| {
                let values = decision.extracted_row(category_index);
                let normalized =
                    Normalizer::normalize(&values, decision.metric_type(category_index));
                let weight = Aggregator::weight(category.importance.as_f64());
                (category.title.clone(), normalized, weight)
            })
            .collect();

        decision
            .options
            .iter()
            .enumerate()
            .map(|(option_index, option)| OptionBreakdown {
                option_name: option.name.clone(),
                contributions: per_category
                    .iter()
                    .map(|(title, normalized, weight)| CategoryContribution {
                        category_title: title.clone(),
                        contribution: normalized
                            .get(option_index)
                            .copied()
                            .unwrap_or_default()
                            * weight,
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MetricType, RawMetric};

    fn decision() -> Decision {
        Decision::builder()
            .options(vec!["A", "B"])
            .category(
                "Cost",
                vec![RawMetric::from(10), RawMetric::from(20)],
                10,
                MetricType::LowerIsBetter,
            )
            .category(
                "Fun",
                vec![RawMetric::from(2), RawMetric::from(9)],
                3,
                MetricType::HigherIsBetter,
            )
            .build()
    }

    #[test]
    fn contributions_match_aggregator_terms() {
        let breakdowns = OptionBreakdownProjector::project(&decision());
        assert_eq!(breakdowns.len(), 2);

        let a = &breakdowns[0];
        assert_eq!(a.option_name, "A");
        assert_eq!(a.contributions[0].category_title, "Cost");
        assert_eq!(a.contributions[0].contribution, 100.0);
        assert_eq!(a.contributions[1].contribution, 0.0);

        let b = &breakdowns[1];
        assert_eq!(b.contributions[0].contribution, 0.0);
        assert_eq!(b.contributions[1].contribution, 9.0);
    }

    #[test]
    fn totals_equal_aggregate_scores() {
        let decision = decision();
        let scores = Aggregator::score(&decision).scores;
        let breakdowns = OptionBreakdownProjector::project(&decision);
        for (breakdown, score) in breakdowns.iter().zip(scores.iter()) {
            assert!((breakdown.total() - score).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_variance_category_contributes_midpoint_share() {
        let decision = Decision::builder()
            .options(vec!["A", "B"])
            .category(
                "Same",
                vec![RawMetric::from(5), RawMetric::from(5)],
                4,
                MetricType::HigherIsBetter,
            )
            .build();

        let breakdowns = OptionBreakdownProjector::project(&decision);
        // 0.5 * 16
        assert_eq!(breakdowns[0].contributions[0].contribution, 8.0);
        assert_eq!(breakdowns[1].contributions[0].contribution, 8.0);
    }

    #[test]
    fn empty_decision_projects_nothing() {
        assert!(OptionBreakdownProjector::project(&Decision::default()).is_empty());
    }
}
