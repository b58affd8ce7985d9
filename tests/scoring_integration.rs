//! Integration tests for the scoring pipeline.
//!
//! Exercises the public evaluation API end to end: extraction,
//! normalization, aggregation, and every derived view.

use wisest::domain::analysis::{ConfidenceLevel, DecisionEvaluator, RiskLevel};
use wisest::domain::decision::Decision;
use wisest::domain::foundation::{MetricType, RawMetric};
use wisest::domain::scoring::Aggregator;

#[test]
fn cost_scenario_scores_cheapest_option_at_100() {
    let decision = Decision::builder()
        .options(vec!["A", "B"])
        .category(
            "Cost",
            vec![RawMetric::from(10), RawMetric::from(20)],
            10,
            MetricType::LowerIsBetter,
        )
        .build();

    let report = DecisionEvaluator::evaluate(&decision);

    assert_eq!(report.scores, vec![100.0, 0.0]);
    assert_eq!(report.best_index, Some(0));
    assert_eq!(report.best_option.as_deref(), Some("A"));
    assert_eq!(report.confidence.level, ConfidenceLevel::High);
}

#[test]
fn identical_metrics_tie_at_the_midpoint() {
    let decision = Decision::builder()
        .options(vec!["A", "B", "C"])
        .category(
            "Flavor",
            vec![RawMetric::from(5), RawMetric::from(5), RawMetric::from(5)],
            8,
            MetricType::HigherIsBetter,
        )
        .build();

    let report = DecisionEvaluator::evaluate(&decision);

    // 0.5 * 64 each
    assert_eq!(report.scores, vec![32.0, 32.0, 32.0]);
    assert_eq!(report.best_index, Some(0));
    assert_eq!(report.confidence.level, ConfidenceLevel::Low);
}

#[test]
fn mixed_metric_types_evaluate_together() {
    let decision = Decision::builder()
        .options(vec!["City flat", "Suburb house"])
        .category(
            "Rent",
            vec![RawMetric::from("1800 eur"), RawMetric::from("1200 eur")],
            9,
            MetricType::LowerIsBetter,
        )
        .category(
            "Has garden",
            vec![RawMetric::from(0), RawMetric::from(1)],
            4,
            MetricType::YesIsOptimal,
        )
        .category(
            "Commute",
            vec![RawMetric::from(15), RawMetric::from(45)],
            6,
            MetricType::LowerIsBetter,
        )
        .category(
            "Gut feeling",
            vec![RawMetric::from(7), RawMetric::from(6)],
            5,
            MetricType::UserRating,
        )
        .build();

    let report = DecisionEvaluator::evaluate(&decision);

    // City flat: 0 + 0 + 36 + 25 = 61; Suburb house: 81 + 16 + 0 + 0 = 97
    assert_eq!(report.scores, vec![61.0, 97.0]);
    assert_eq!(report.best_option.as_deref(), Some("Suburb house"));

    // Every option gets a breakdown covering every category
    assert_eq!(report.option_breakdowns.len(), 2);
    for breakdown in &report.option_breakdowns {
        assert_eq!(breakdown.contributions.len(), 4);
    }

    // Categories ranked by importance: Rent first
    assert_eq!(report.category_breakdowns[0].title, "Rent");
    assert_eq!(report.category_breakdowns[0].rank, 1);
}

#[test]
fn sensitivity_flags_the_category_that_flips_the_winner() {
    let decision = Decision::builder()
        .options(vec!["A", "B"])
        .category(
            "Cost",
            vec![RawMetric::from(10), RawMetric::from(20)],
            5,
            MetricType::LowerIsBetter,
        )
        .category(
            "Fun",
            vec![RawMetric::from(1), RawMetric::from(9)],
            4,
            MetricType::HigherIsBetter,
        )
        .build();

    let report = DecisionEvaluator::evaluate(&decision);

    assert_eq!(report.best_option.as_deref(), Some("A"));
    let fun = report
        .stability
        .categories
        .iter()
        .find(|c| c.title == "Fun")
        .unwrap();
    assert!(!fun.is_stable);
    assert!(report
        .stability
        .categories
        .iter()
        .find(|c| c.title == "Cost")
        .unwrap()
        .is_stable);
}

#[test]
fn risk_tracks_unfavorable_positions() {
    let decision = Decision::builder()
        .options(vec!["Safe bet", "Long shot"])
        .category(
            "Odds",
            vec![RawMetric::from(9), RawMetric::from(1)],
            10,
            MetricType::HigherIsBetter,
        )
        .build();

    let report = DecisionEvaluator::evaluate(&decision);

    let safe = &report.risk.options[0];
    let risky = &report.risk.options[1];
    assert_eq!(safe.level, RiskLevel::Low);
    assert_eq!(risky.level, RiskLevel::High);
    assert!(risky.total_risk > safe.total_risk);
}

#[test]
fn malformed_and_missing_cells_never_break_scoring() {
    let decision = Decision::builder()
        .options(vec!["A", "B", "C"])
        .category(
            "Messy",
            vec![
                RawMetric::from("around 40 units"),
                RawMetric::Absent,
                RawMetric::from("no number here"),
            ],
            7,
            MetricType::HigherIsBetter,
        )
        .build();

    let report = DecisionEvaluator::evaluate(&decision);

    assert!(report.scores.iter().all(|s| s.is_finite()));
    // "around 40" extracts to 40, the others to 0
    assert_eq!(report.best_index, Some(0));
}

#[test]
fn empty_input_yields_empty_ordering() {
    let report = DecisionEvaluator::evaluate(&Decision::default());
    assert!(report.scores.is_empty());
    assert_eq!(report.best_index, None);
    assert_eq!(report.confidence.level, ConfidenceLevel::Low);
}

#[test]
fn option_breakdown_totals_match_scores_across_views() {
    let decision = Decision::builder()
        .options(vec!["A", "B"])
        .category(
            "Cost",
            vec![RawMetric::from(10), RawMetric::from(20)],
            10,
            MetricType::LowerIsBetter,
        )
        .category(
            "Fit",
            vec![RawMetric::from(3), RawMetric::from(8)],
            6,
            MetricType::HigherIsBetter,
        )
        .build();

    let report = DecisionEvaluator::evaluate(&decision);
    let scores = Aggregator::score(&decision).scores;

    for (breakdown, score) in report.option_breakdowns.iter().zip(scores.iter()) {
        let total: f64 = breakdown.contributions.iter().map(|c| c.contribution).sum();
        assert!((total - score).abs() < 1e-9);
    }
}
