//! EvaluateDecisionHandler - runs the scoring pipeline over one decision.

use crate::domain::analysis::{DecisionEvaluator, DecisionReport};
use crate::domain::decision::Decision;

/// Command to evaluate a decision.
#[derive(Debug, Clone)]
pub struct EvaluateDecisionCommand {
    pub decision: Decision,
}

/// Handler for decision evaluation.
///
/// Pure computation over the command's input tables; holds no ports and
/// cannot fail — degenerate input yields an empty report.
#[derive(Debug, Default)]
pub struct EvaluateDecisionHandler;

impl EvaluateDecisionHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, command: EvaluateDecisionCommand) -> DecisionReport {
        DecisionEvaluator::evaluate(&command.decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ConfidenceLevel;
    use crate::domain::foundation::{MetricType, RawMetric};

    #[test]
    fn handler_evaluates_a_decision() {
        let decision = Decision::builder()
            .options(vec!["A", "B"])
            .category(
                "Cost",
                vec![RawMetric::from(10), RawMetric::from(20)],
                10,
                MetricType::LowerIsBetter,
            )
            .build();

        let report = EvaluateDecisionHandler::new().handle(EvaluateDecisionCommand { decision });
        assert_eq!(report.best_option.as_deref(), Some("A"));
        assert_eq!(report.confidence.level, ConfidenceLevel::High);
    }

    #[test]
    fn handler_accepts_empty_input() {
        let report = EvaluateDecisionHandler::new().handle(EvaluateDecisionCommand {
            decision: Decision::default(),
        });
        assert!(report.scores.is_empty());
        assert_eq!(report.best_index, None);
    }
}
