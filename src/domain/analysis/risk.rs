//! Risk assessment - importance-weighted exposure per option.

use serde::{Deserialize, Serialize};

use crate::domain::decision::Decision;
use crate::domain::scoring::Normalizer;

/// Total risk above this is High.
pub const HIGH_RISK_THRESHOLD: f64 = 7.0;

/// Total risk above this (and at most [`HIGH_RISK_THRESHOLD`]) is Medium.
pub const MEDIUM_RISK_THRESHOLD: f64 = 4.0;

/// Qualitative risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Classifies a total risk value.
    pub fn classify(total_risk: f64) -> Self {
        if total_risk > HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if total_risk > MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
        }
    }
}

/// Risk verdict for one option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionRisk {
    pub option_name: String,
    pub total_risk: f64,
    pub level: RiskLevel,
}

/// Per-option risk verdicts for a decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub options: Vec<OptionRisk>,
}

impl RiskReport {
    /// Returns the lowest-risk option, first occurrence on ties.
    pub fn safest(&self) -> Option<&OptionRisk> {
        self.options.iter().fold(None, |safest, candidate| {
            match safest {
                Some(current) if current.total_risk <= candidate.total_risk => Some(current),
                _ => Some(candidate),
            }
        })
    }
}

/// Projects a decision into per-option risk exposure.
pub struct RiskAnalyzer;

impl RiskAnalyzer {
    /// Assesses every option's risk.
    ///
    /// Each category's values are rescaled to the direction-corrected
    /// 0-10 scale (10 = favorable, midpoint 5 on zero range); the risk
    /// factor is the unfavorable remainder `10 - rescaled`. An option's
    /// total risk is the mean over categories of
    /// `importance x risk_factor / 10`.
    ///
    /// # Edge Cases
    /// - Zero categories: total risk 0, level Low
    /// - Zero options: empty report
    pub fn assess(decision: &Decision) -> RiskReport {
        if decision.options.is_empty() {
            return RiskReport::default();
        }

        let rescaled_rows: Vec<Vec<f64>> = (0..decision.category_count())
            .map(|category_index| {
                Normalizer::rescale_to_ten(
                    &decision.extracted_row(category_index),
                    decision.metric_type(category_index),
                )
            })
            .collect();

        let options = decision
            .options
            .iter()
            .enumerate()
            .map(|(option_index, option)| {
                let total: f64 = decision
                    .categories
                    .iter()
                    .zip(rescaled_rows.iter())
                    .map(|(category, rescaled)| {
                        let favorability =
                            rescaled.get(option_index).copied().unwrap_or_default();
                        category.importance.as_f64() * (10.0 - favorability) / 10.0
                    })
                    .sum();

                let total_risk = if decision.categories.is_empty() {
                    0.0
                } else {
                    total / decision.category_count() as f64
                };

                OptionRisk {
                    option_name: option.name.clone(),
                    total_risk,
                    level: RiskLevel::classify(total_risk),
                }
            })
            .collect();

        RiskReport { options }
    }
}
