//! Value extraction - turning raw metric cells into finite numbers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::RawMetric;

/// First signed decimal substring: optional `-`, digits, optional `.digits`.
static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?\d+(\.\d+)?").expect("valid number pattern"));

/// Extracts a finite numeric value from a raw metric cell.
///
/// Total function: every cell maps to a number. Text cells yield the first
/// signed decimal substring ("$1200" -> 1200.0, "45 min" -> 45.0).
///
/// # Edge Cases
/// - `Absent` -> `0.0`
/// - Non-finite numbers (NaN/inf) -> `0.0`
/// - Text without digits -> `0.0`
pub fn extract_value(metric: &RawMetric) -> f64 {
    match metric {
        RawMetric::Number(value) if value.is_finite() => *value,
        RawMetric::Number(_) => 0.0,
        RawMetric::Text(text) => NUMBER_PATTERN
            .find(text)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
        RawMetric::Absent => 0.0,
    }
}
