//! Normalizer - min-max scaling with direction correction.

use crate::domain::foundation::MetricType;

/// Normalized value assigned to every option when a category has no
/// variance: the category does not discriminate, so nobody is penalized.
pub const NEUTRAL_MIDPOINT: f64 = 0.5;

/// Stateless normalization of one category's extracted value vector.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes a category's values to [0, 1], direction-corrected.
    ///
    /// Linear min-max scaling; `LowerIsBetter` categories take the
    /// complement so the smallest raw value maps to the highest score.
    /// The result is clamped to [0, 1].
    ///
    /// # Edge Cases
    /// - Empty input: empty output
    /// - `max == min`: every value is [`NEUTRAL_MIDPOINT`]
    pub fn normalize(values: &[f64], metric_type: MetricType) -> Vec<f64> {
        let Some((min, max)) = Self::bounds(values) else {
            return Vec::new();
        };
        let range = max - min;
        if range == 0.0 {
            return vec![NEUTRAL_MIDPOINT; values.len()];
        }

        values
            .iter()
            .map(|value| {
                let scaled = (value - min) / range;
                let corrected = if metric_type.is_inverted() {
                    1.0 - scaled
                } else {
                    scaled
                };
                corrected.clamp(0.0, 1.0)
            })
            .collect()
    }

    /// Rescales a category's values to a direction-corrected 0-10 scale,
    /// used by the risk projection. 10 is always the favorable end.
    ///
    /// # Edge Cases
    /// - Empty input: empty output
    /// - `max == min`: every value is the midpoint `5.0`
    pub fn rescale_to_ten(values: &[f64], metric_type: MetricType) -> Vec<f64> {
        Self::normalize(values, metric_type)
            .into_iter()
            .map(|n| n * 10.0)
            .collect()
    }

    fn bounds(values: &[f64]) -> Option<(f64, f64)> {
        let first = *values.first()?;
        let (min, max) = values.iter().fold((first, first), |(min, max), &v| {
            (min.min(v), max.max(v))
        });
        Some((min, max))
    }
}
