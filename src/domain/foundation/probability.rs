//! Probability value object (fraction in 0.0..=1.0, entered as a percent).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A probability between 0 and 1 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Probability(f64);

impl Probability {
    /// Certain failure.
    pub const ZERO: Self = Self(0.0);

    /// Certain success.
    pub const ONE: Self = Self(1.0);

    /// Creates a Probability from a percent, clamping to 0..=100.
    ///
    /// Non-finite input is treated as zero.
    pub fn from_percent(percent: f64) -> Self {
        if !percent.is_finite() {
            return Self::ZERO;
        }
        Self(percent.clamp(0.0, 100.0) / 100.0)
    }

    /// Creates a Probability from a percent, returning error if out of range.
    pub fn try_from_percent(percent: f64) -> Result<Self, ValidationError> {
        if !percent.is_finite() {
            return Err(ValidationError::invalid_format(
                "probability",
                "must be a finite number",
            ));
        }
        if !(0.0..=100.0).contains(&percent) {
            return Err(ValidationError::out_of_range(
                "probability",
                0,
                100,
                percent.round() as i32,
            ));
        }
        Ok(Self(percent / 100.0))
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a percent (0.0 to 100.0).
    pub fn as_percent(&self) -> f64 {
        self.0 * 100.0
    }

    /// Returns the complementary probability.
    pub fn complement(&self) -> Self {
        Self(1.0 - self.0)
    }
}

impl Default for Probability {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.as_percent())
    }
}
