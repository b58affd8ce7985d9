//! Metric type enum - how a category's raw values relate to favorability.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// How a category's raw metric values map to favorability.
///
/// Wire format is the integer code 0-4, index-aligned with the category list.
/// Boolean types store their answers as 1/0 with 1 favorable, so they
/// normalize the same way as `HigherIsBetter`; only `LowerIsBetter` is
/// direction-inverted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MetricType {
    /// Larger raw value is more favorable.
    #[default]
    HigherIsBetter,
    /// Smaller raw value is more favorable; inverted before scoring.
    LowerIsBetter,
    /// Boolean stored as 1/0, "Yes" (1) favorable.
    YesIsOptimal,
    /// Boolean stored as 1/0, "No" (1) favorable.
    NoIsOptimal,
    /// A 1-10 rating entered directly, already higher-is-better.
    UserRating,
}

impl MetricType {
    /// Creates a MetricType from its wire code, returning error if unknown.
    pub fn try_from_code(code: u8) -> Result<Self, ValidationError> {
        match code {
            0 => Ok(MetricType::HigherIsBetter),
            1 => Ok(MetricType::LowerIsBetter),
            2 => Ok(MetricType::YesIsOptimal),
            3 => Ok(MetricType::NoIsOptimal),
            4 => Ok(MetricType::UserRating),
            _ => Err(ValidationError::invalid_format(
                "metric_type",
                format!("unknown code {}", code),
            )),
        }
    }

    /// Returns the wire code.
    pub fn code(&self) -> u8 {
        match self {
            MetricType::HigherIsBetter => 0,
            MetricType::LowerIsBetter => 1,
            MetricType::YesIsOptimal => 2,
            MetricType::NoIsOptimal => 3,
            MetricType::UserRating => 4,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            MetricType::HigherIsBetter => "Higher is better",
            MetricType::LowerIsBetter => "Lower is better",
            MetricType::YesIsOptimal => "Yes is optimal",
            MetricType::NoIsOptimal => "No is optimal",
            MetricType::UserRating => "User rating",
        }
    }

    /// Returns true if smaller raw values are favorable.
    pub fn is_inverted(&self) -> bool {
        matches!(self, MetricType::LowerIsBetter)
    }
}

impl TryFrom<u8> for MetricType {
    type Error = ValidationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::try_from_code(code)
    }
}

impl From<MetricType> for u8 {
    fn from(metric_type: MetricType) -> Self {
        metric_type.code()
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_type_try_from_code_accepts_valid_codes() {
        assert_eq!(
            MetricType::try_from_code(0).unwrap(),
            MetricType::HigherIsBetter
        );
        assert_eq!(
            MetricType::try_from_code(1).unwrap(),
            MetricType::LowerIsBetter
        );
        assert_eq!(
            MetricType::try_from_code(2).unwrap(),
            MetricType::YesIsOptimal
        );
        assert_eq!(
            MetricType::try_from_code(3).unwrap(),
            MetricType::NoIsOptimal
        );
        assert_eq!(MetricType::try_from_code(4).unwrap(), MetricType::UserRating);
    }

    #[test]
    fn metric_type_try_from_code_rejects_unknown_codes() {
        assert!(MetricType::try_from_code(5).is_err());
        assert!(MetricType::try_from_code(255).is_err());
    }

    #[test]
    fn metric_type_code_roundtrips() {
        for code in 0..=4 {
            let metric_type = MetricType::try_from_code(code).unwrap();
            assert_eq!(metric_type.code(), code);
        }
    }

    #[test]
    fn metric_type_only_lower_is_better_inverts() {
        assert!(!MetricType::HigherIsBetter.is_inverted());
        assert!(MetricType::LowerIsBetter.is_inverted());
        assert!(!MetricType::YesIsOptimal.is_inverted());
        assert!(!MetricType::NoIsOptimal.is_inverted());
        assert!(!MetricType::UserRating.is_inverted());
    }

    #[test]
    fn metric_type_default_is_higher_is_better() {
        assert_eq!(MetricType::default(), MetricType::HigherIsBetter);
    }

    #[test]
    fn metric_type_serializes_as_code() {
        assert_eq!(
            serde_json::to_string(&MetricType::LowerIsBetter).unwrap(),
            "1"
        );
        let parsed: MetricType = serde_json::from_str("4").unwrap();
        assert_eq!(parsed, MetricType::UserRating);
    }

    #[test]
    fn metric_type_deserialize_rejects_unknown_code() {
        let result: Result<MetricType, _> = serde_json::from_str("9");
        assert!(result.is_err());
    }

    #[test]
    fn metric_type_displays_label() {
        assert_eq!(format!("{}", MetricType::LowerIsBetter), "Lower is better");
    }
}
