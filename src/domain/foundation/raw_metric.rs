//! Raw metric cell - the tagged union of what users actually enter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single raw metric cell as entered for one option in one category.
///
/// Input forms produce a mix of numbers, free text with embedded numbers
/// ("$1,200" or "45 min"), and blanks. The wire format is JSON
/// `number | string | null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMetric {
    /// A plain numeric entry.
    Number(f64),
    /// Free text, possibly containing a numeric substring.
    Text(String),
    /// Blank / never filled in.
    Absent,
}

impl RawMetric {
    /// Returns true if the cell was never filled in.
    pub fn is_absent(&self) -> bool {
        matches!(self, RawMetric::Absent)
    }
}

impl Default for RawMetric {
    fn default() -> Self {
        RawMetric::Absent
    }
}

impl From<f64> for RawMetric {
    fn from(value: f64) -> Self {
        RawMetric::Number(value)
    }
}

impl From<i32> for RawMetric {
    fn from(value: i32) -> Self {
        RawMetric::Number(f64::from(value))
    }
}

impl From<&str> for RawMetric {
    fn from(value: &str) -> Self {
        RawMetric::Text(value.to_string())
    }
}

impl From<String> for RawMetric {
    fn from(value: String) -> Self {
        RawMetric::Text(value)
    }
}

impl fmt::Display for RawMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawMetric::Number(v) => write!(f, "{}", v),
            RawMetric::Text(s) => write!(f, "{}", s),
            RawMetric::Absent => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_metric_deserializes_from_number() {
        let metric: RawMetric = serde_json::from_str("42.5").unwrap();
        assert_eq!(metric, RawMetric::Number(42.5));
    }

    #[test]
    fn raw_metric_deserializes_from_string() {
        let metric: RawMetric = serde_json::from_str("\"$1200\"").unwrap();
        assert_eq!(metric, RawMetric::Text("$1200".to_string()));
    }

    #[test]
    fn raw_metric_deserializes_from_null() {
        let metric: RawMetric = serde_json::from_str("null").unwrap();
        assert_eq!(metric, RawMetric::Absent);
    }

    #[test]
    fn raw_metric_serializes_absent_as_null() {
        assert_eq!(serde_json::to_string(&RawMetric::Absent).unwrap(), "null");
    }

    #[test]
    fn raw_metric_mixed_row_deserializes() {
        let row: Vec<RawMetric> = serde_json::from_str(r#"[3, "fast", null]"#).unwrap();
        assert_eq!(row.len(), 3);
        assert_eq!(row[0], RawMetric::Number(3.0));
        assert_eq!(row[1], RawMetric::Text("fast".to_string()));
        assert!(row[2].is_absent());
    }

    #[test]
    fn raw_metric_from_conversions() {
        assert_eq!(RawMetric::from(7), RawMetric::Number(7.0));
        assert_eq!(RawMetric::from(1.5), RawMetric::Number(1.5));
        assert_eq!(RawMetric::from("ok"), RawMetric::Text("ok".to_string()));
    }

    #[test]
    fn raw_metric_default_is_absent() {
        assert!(RawMetric::default().is_absent());
    }

    #[test]
    fn raw_metric_displays() {
        assert_eq!(format!("{}", RawMetric::Number(3.0)), "3");
        assert_eq!(format!("{}", RawMetric::Text("fast".into())), "fast");
        assert_eq!(format!("{}", RawMetric::Absent), "-");
    }
}
