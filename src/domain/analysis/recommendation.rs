//! Recommendation tiers keyed by composite score.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::domain::foundation::Score;

/// Five ordered recommendation tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationTier {
    No,
    #[serde(rename = "WAIT_1WEEK")]
    WaitOneWeek,
    #[serde(rename = "WAIT_48H")]
    Wait48h,
    Go,
    StrongGo,
}

impl RecommendationTier {
    /// All tiers, highest first.
    pub const ALL: [RecommendationTier; 5] = [
        RecommendationTier::StrongGo,
        RecommendationTier::Go,
        RecommendationTier::Wait48h,
        RecommendationTier::WaitOneWeek,
        RecommendationTier::No,
    ];

    /// Maps a composite score to its tier.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            80..=u8::MAX => RecommendationTier::StrongGo,
            75..=79 => RecommendationTier::Go,
            55..=74 => RecommendationTier::Wait48h,
            40..=54 => RecommendationTier::WaitOneWeek,
            _ => RecommendationTier::No,
        }
    }

    /// Inclusive score range covered by this tier.
    pub fn score_range(&self) -> RangeInclusive<u8> {
        match self {
            RecommendationTier::StrongGo => 80..=100,
            RecommendationTier::Go => 75..=79,
            RecommendationTier::Wait48h => 55..=74,
            RecommendationTier::WaitOneWeek => 40..=54,
            RecommendationTier::No => 0..=39,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecommendationTier::StrongGo => "STRONG GO",
            RecommendationTier::Go => "GO",
            RecommendationTier::Wait48h => "WAIT 48H",
            RecommendationTier::WaitOneWeek => "WAIT 1 WEEK",
            RecommendationTier::No => "NO",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            RecommendationTier::StrongGo => {
                "This purchase passes rational analysis with high confidence"
            }
            RecommendationTier::Go => "Proceed with purchase",
            RecommendationTier::Wait48h => "Delay 48-72 hours, test if possible",
            RecommendationTier::WaitOneWeek => "Delay one week before deciding",
            RecommendationTier::No => "Skip this purchase",
        }
    }

    /// Longer explanation shown alongside the guidance.
    pub fn context(&self) -> &'static str {
        match self {
            RecommendationTier::StrongGo | RecommendationTier::Go => {
                "This is a well-reasoned decision with strong fundamentals."
            }
            RecommendationTier::Wait48h => {
                "This decision has merit but requires a cooling-off period to verify your motivation."
            }
            RecommendationTier::WaitOneWeek => {
                "Significant concerns exist. A longer delay will help you gain clarity."
            }
            RecommendationTier::No => {
                "The evidence strongly suggests this purchase would be a mistake."
            }
        }
    }

    /// True for the two tiers whose label contains "GO".
    pub fn is_go(&self) -> bool {
        matches!(self, RecommendationTier::StrongGo | RecommendationTier::Go)
    }

    /// True for the two waiting tiers.
    pub fn is_wait(&self) -> bool {
        matches!(
            self,
            RecommendationTier::Wait48h | RecommendationTier::WaitOneWeek
        )
    }

    /// Parses a tier from its label.
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::ALL.iter().copied().find(|t| t.label() == wanted)
    }
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Tier plus the score it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub score: Score,
    pub tier: RecommendationTier,
}

impl Recommendation {
    pub fn for_score(score: Score) -> Self {
        Self {
            score,
            tier: RecommendationTier::from_score(score),
        }
    }
}
