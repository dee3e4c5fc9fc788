//! Bias Contamination Assessor - taxonomy lookup and severity tiers.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Category a cognitive bias belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BiasCategory {
    Social,
    Pricing,
    Temporal,
    Emotional,
    Cognitive,
    Behavioral,
}

impl BiasCategory {
    /// All categories in display order.
    pub const ALL: [BiasCategory; 6] = [
        BiasCategory::Social,
        BiasCategory::Pricing,
        BiasCategory::Temporal,
        BiasCategory::Emotional,
        BiasCategory::Cognitive,
        BiasCategory::Behavioral,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BiasCategory::Social => "Social",
            BiasCategory::Pricing => "Pricing",
            BiasCategory::Temporal => "Temporal",
            BiasCategory::Emotional => "Emotional",
            BiasCategory::Cognitive => "Cognitive",
            BiasCategory::Behavioral => "Behavioral",
        }
    }

    /// Number of taxonomy entries in this category.
    pub fn size(&self) -> usize {
        BIAS_TAXONOMY.iter().filter(|b| b.category == *self).count()
    }
}

impl fmt::Display for BiasCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A known cognitive bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiasDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: BiasCategory,
}

const fn bias(id: &'static str, name: &'static str, category: BiasCategory) -> BiasDefinition {
    BiasDefinition { id, name, category }
}

/// The fixed 23-entry bias taxonomy.
pub const BIAS_TAXONOMY: [BiasDefinition; 23] = [
    bias("fomo", "FOMO", BiasCategory::Social),
    bias("social_proof", "Social Proof", BiasCategory::Social),
    bias("authority", "Authority", BiasCategory::Social),
    bias("reciprocity", "Reciprocity", BiasCategory::Social),
    bias("anchoring", "Anchoring", BiasCategory::Pricing),
    bias("scarcity", "Scarcity", BiasCategory::Pricing),
    bias("cashless", "Cashless", BiasCategory::Pricing),
    bias("denomination", "Denomination", BiasCategory::Pricing),
    bias("projection", "Projection", BiasCategory::Temporal),
    bias("hyperbolic_discount", "Hyperbolic Discounting", BiasCategory::Temporal),
    bias("present_bias", "Present Bias", BiasCategory::Temporal),
    bias("loss_aversion", "Loss Aversion", BiasCategory::Emotional),
    bias("optimism", "Optimism", BiasCategory::Emotional),
    bias("normalcy", "Normalcy", BiasCategory::Emotional),
    bias("sunk_cost", "Sunk Cost", BiasCategory::Emotional),
    bias("overconfidence", "Overconfidence", BiasCategory::Cognitive),
    bias("confirmation", "Confirmation", BiasCategory::Cognitive),
    bias("framing", "Framing", BiasCategory::Cognitive),
    bias("choice_overload", "Decision Fatigue", BiasCategory::Cognitive),
    bias("mere_exposure", "Mere Exposure", BiasCategory::Cognitive),
    bias("status_quo", "Status Quo", BiasCategory::Behavioral),
    bias("endowment", "Endowment", BiasCategory::Behavioral),
    bias("decoy", "Decoy", BiasCategory::Behavioral),
];

/// Total number of known biases.
pub const TAXONOMY_SIZE: usize = BIAS_TAXONOMY.len();

static BIAS_INDEX: Lazy<HashMap<&'static str, &'static BiasDefinition>> =
    Lazy::new(|| BIAS_TAXONOMY.iter().map(|b| (b.id, b)).collect());

/// Contamination severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BiasSeverity {
    Low,
    Moderate,
    High,
    Severe,
}

impl BiasSeverity {
    /// Overall tier from the number of detected biases.
    pub fn from_count(count: usize) -> Self {
        match count {
            0..=2 => BiasSeverity::Low,
            3..=5 => BiasSeverity::Moderate,
            6..=10 => BiasSeverity::High,
            _ => BiasSeverity::Severe,
        }
    }

    /// Per-category tier from the detected share in percent.
    pub fn from_share(percent: f64) -> Self {
        if percent > 66.0 {
            BiasSeverity::Severe
        } else if percent > 33.0 {
            BiasSeverity::High
        } else if percent > 0.0 {
            BiasSeverity::Moderate
        } else {
            BiasSeverity::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BiasSeverity::Low => "Low",
            BiasSeverity::Moderate => "Moderate",
            BiasSeverity::High => "High",
            BiasSeverity::Severe => "Severe",
        }
    }
}

impl fmt::Display for BiasSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Detected share of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryExposure {
    pub category: BiasCategory,
    pub detected: usize,
    pub total: usize,
    pub severity: BiasSeverity,
}

impl CategoryExposure {
    pub fn share_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.detected as f64 / self.total as f64 * 100.0
    }
}

/// Result of assessing a set of declared biases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasAssessment {
    /// Recognized bias ids, in taxonomy order.
    pub detected: Vec<String>,
    pub count: usize,
    pub severity: BiasSeverity,
    pub categories: Vec<CategoryExposure>,
}

impl BiasAssessment {
    /// Exposure for a single category.
    pub fn category(&self, category: BiasCategory) -> Option<&CategoryExposure> {
        self.categories.iter().find(|c| c.category == category)
    }
}

/// Assessor for bias contamination.
pub struct BiasAssessor;

impl BiasAssessor {
    /// Looks up a bias by id.
    pub fn lookup(id: &str) -> Option<&'static BiasDefinition> {
        BIAS_INDEX.get(id).copied()
    }

    /// Assesses the selected ids. Unknown ids are ignored.
    pub fn assess<'a, I>(selected: I) -> BiasAssessment
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut chosen: Vec<&'static BiasDefinition> = selected
            .into_iter()
            .filter_map(|id| Self::lookup(id.trim()))
            .collect();
        chosen.sort_by_key(|b| Self::taxonomy_position(b.id));
        chosen.dedup_by_key(|b| b.id);

        let categories = BiasCategory::ALL
            .iter()
            .map(|category| {
                let total = category.size();
                let detected = chosen.iter().filter(|b| b.category == *category).count();
                let share = if total == 0 {
                    0.0
                } else {
                    detected as f64 / total as f64 * 100.0
                };
                CategoryExposure {
                    category: *category,
                    detected,
                    total,
                    severity: BiasSeverity::from_share(share),
                }
            })
            .collect();

        let count = chosen.len();
        BiasAssessment {
            detected: chosen.iter().map(|b| b.id.to_string()).collect(),
            count,
            severity: BiasSeverity::from_count(count),
            categories,
        }
    }

    fn taxonomy_position(id: &str) -> usize {
        BIAS_TAXONOMY
            .iter()
            .position(|b| b.id == id)
            .unwrap_or(TAXONOMY_SIZE)
    }
}
