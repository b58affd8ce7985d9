//! Importance value object (0-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A category's user-assigned weight, between 0 and 10 inclusive.
///
/// Scoring squares this value before use, so a 10 dominates a 1 by a
/// factor of 100 rather than 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Importance(u8);

impl Importance {
    /// Zero importance (category contributes nothing).
    pub const ZERO: Self = Self(0);

    /// Maximum importance.
    pub const MAX: Self = Self(10);

    /// Creates a new Importance, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(10))
    }

    /// Creates an Importance, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 10 {
            return Err(ValidationError::out_of_range(
                "importance",
                0,
                10,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as f64, for weighting arithmetic.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Importance {
    /// Mid-scale default, matching the input form's initial slider position.
    fn default() -> Self {
        Self(5)
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}
