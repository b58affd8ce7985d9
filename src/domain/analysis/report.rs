//! Decision report - every derived view assembled in one pass.

use serde::{Deserialize, Serialize};

use super::{
    CategoryBreakdown, CategoryBreakdownProjector, ConfidenceEstimator, ConfidenceReport,
    OptionBreakdown, OptionBreakdownProjector, RiskAnalyzer, RiskReport, StabilityAnalyzer,
    StabilityReport,
};
use crate::domain::decision::Decision;
use crate::domain::scoring::Aggregator;

/// The full evaluation output: scores plus every derived view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionReport {
    pub scores: Vec<f64>,
    pub best_index: Option<usize>,
    pub best_option: Option<String>,
    pub category_breakdowns: Vec<CategoryBreakdown>,
    pub option_breakdowns: Vec<OptionBreakdown>,
    pub stability: StabilityReport,
    pub risk: RiskReport,
    pub confidence: ConfidenceReport,
}

/// Runs the whole pipeline over one decision.
pub struct DecisionEvaluator;

impl DecisionEvaluator {
    /// Evaluates a decision: scores, winner, and all projections.
    ///
    /// Pure function of the input; safe to call with partially-filled
    /// forms — degenerate input produces empty views, never an error.
    pub fn evaluate(decision: &Decision) -> DecisionReport {
        let score_result = Aggregator::score(decision);
        let best_option = score_result
            .best_index
            .and_then(|i| decision.options.get(i))
            .map(|o| o.name.clone());
        let confidence = ConfidenceEstimator::estimate(&score_result);

        DecisionReport {
            best_option,
            best_index: score_result.best_index,
            scores: score_result.scores,
            category_breakdowns: CategoryBreakdownProjector::project(decision),
            option_breakdowns: OptionBreakdownProjector::project(decision),
            stability: StabilityAnalyzer::analyze(decision),
            risk: RiskAnalyzer::assess(decision),
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ConfidenceLevel;
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
            .build()
    }

    #[test]
    fn report_assembles_all_views() {
        let report = DecisionEvaluator::evaluate(&decision());

        assert_eq!(report.scores, vec![100.0, 0.0]);
        assert_eq!(report.best_index, Some(0));
        assert_eq!(report.best_option.as_deref(), Some("A"));
        assert_eq!(report.category_breakdowns.len(), 1);
        assert_eq!(report.option_breakdowns.len(), 2);
        assert_eq!(report.stability.categories.len(), 1);
        assert_eq!(report.risk.options.len(), 2);
        assert_eq!(report.confidence.level, ConfidenceLevel::High);
    }

    #[test]
    fn empty_decision_produces_empty_report() {
        let report = DecisionEvaluator::evaluate(&Decision::default());

        assert!(report.scores.is_empty());
        assert_eq!(report.best_index, None);
        assert_eq!(report.best_option, None);
        assert!(report.category_breakdowns.is_empty());
        assert!(report.option_breakdowns.is_empty());
        assert!(report.stability.categories.is_empty());
        assert!(report.risk.options.is_empty());
        assert_eq!(report.confidence.level, ConfidenceLevel::Low);
    }

    #[test]
    fn report_serializes_to_json() {
        let report = DecisionEvaluator::evaluate(&decision());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"best_option\":\"A\""));
        assert!(json.contains("\"confidence\""));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let decision = decision();
        assert_eq!(
            DecisionEvaluator::evaluate(&decision),
            DecisionEvaluator::evaluate(&decision)
        );
    }
}
