//! Categorical answers collected during an assessment.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Binary yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Parses "yes"/"no" (case-insensitive).
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(YesNo::Yes),
            "no" => Ok(YesNo::No),
            other => Err(ValidationError::invalid_format(
                "answer",
                format!("expected yes or no, got '{}'", other),
            )),
        }
    }

    /// Returns true for `Yes`.
    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

/// Returns true only when the optional answer is present and affirmative.
pub fn affirmed(answer: Option<YesNo>) -> bool {
    answer.map(|a| a.is_yes()).unwrap_or(false)
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Anticipated regret at a time horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RegretLevel {
    None,
    Low,
    Medium,
    High,
}

impl RegretLevel {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RegretLevel::None => "None",
            RegretLevel::Low => "Low",
            RegretLevel::Medium => "Medium",
            RegretLevel::High => "High",
        }
    }

    /// None and Low count as acceptable regret.
    pub fn is_low(&self) -> bool {
        matches!(self, RegretLevel::None | RegretLevel::Low)
    }
}

impl fmt::Display for RegretLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
