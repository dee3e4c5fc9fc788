//! Composite score value object (0-100 points).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Highest achievable composite score.
pub const MAX_SCORE: u8 = 100;

/// Sum of awarded criterion points, between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Zero points.
    pub const ZERO: Self = Self(0);

    /// Full marks.
    pub const MAX: Self = Self(MAX_SCORE);

    /// Creates a new Score, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > MAX_SCORE {
            return Err(ValidationError::out_of_range(
                "score",
                0,
                i32::from(MAX_SCORE),
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_new_clamps_to_max() {
        assert_eq!(Score::new(0).value(), 0);
        assert_eq!(Score::new(100).value(), 100);
        assert_eq!(Score::new(101).value(), 100);
        assert_eq!(Score::new(255).value(), 100);
    }

    #[test]
    fn score_try_new_rejects_over_max() {
        match Score::try_new(120) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "score");
                assert_eq!(min, 0);
                assert_eq!(max, 100);
                assert_eq!(actual, 120);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn score_displays_out_of_hundred() {
        assert_eq!(format!("{}", Score::new(35)), "35/100");
    }

    #[test]
    fn score_serializes_as_number() {
        let json = serde_json::to_string(&Score::new(80)).unwrap();
        assert_eq!(json, "80");
        let back: Score = serde_json::from_str("55").unwrap();
        assert_eq!(back.value(), 55);
    }
}
