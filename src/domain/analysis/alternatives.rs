//! Alternatives Comparator - ranks competing options by value density.
//!
//! ```text
//! year1     = upfront + monthly × 12
//! year3     = upfront + monthly × 36
//! value     = effectiveness / year1 × 10 000   (maximal when year1 = 0)
//! ```
//!
//! Ranking is a stable descending sort on value, so equal values keep their
//! input order. Free options outrank every paid one and are ordered among
//! themselves by effectiveness.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Kind of option being compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlternativeKind {
    #[default]
    NewProduct,
    AlternativeProduct,
    ManualMethod,
    HiredService,
    ExistingSolution,
    NoAction,
    /// Any tag outside the known set.
    #[serde(other)]
    Unspecified,
}

impl AlternativeKind {
    pub fn label(&self) -> &'static str {
        match self {
            AlternativeKind::NewProduct => "Product Purchase",
            AlternativeKind::AlternativeProduct => "Alternative Product",
            AlternativeKind::ManualMethod => "DIY/Manual Method",
            AlternativeKind::HiredService => "Hire Service/Professional",
            AlternativeKind::ExistingSolution => "Use Existing Solution",
            AlternativeKind::NoAction => "Do Nothing",
            AlternativeKind::Unspecified => "Other",
        }
    }
}

impl fmt::Display for AlternativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One competing way of meeting the same need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alternative {
    pub kind: AlternativeKind,
    pub name: String,
    pub upfront_cost: f64,
    pub monthly_cost: f64,
    /// Hours per week the option demands.
    pub time_per_week: f64,
    /// 1 (effortless) to 5 (demanding).
    pub effort: u8,
    /// 1 (barely works) to 10 (fully solves the need).
    pub effectiveness: u8,
    pub lifespan_years: u32,
}

impl Default for Alternative {
    fn default() -> Self {
        Self {
            kind: AlternativeKind::NewProduct,
            name: String::new(),
            upfront_cost: 0.0,
            monthly_cost: 0.0,
            time_per_week: 0.0,
            effort: 3,
            effectiveness: 5,
            lifespan_years: 1,
        }
    }
}

impl Alternative {
    /// Creates a named alternative with default effort, effectiveness and lifespan.
    pub fn new(kind: AlternativeKind, name: impl Into<String>, upfront: f64, monthly: f64) -> Self {
        Self {
            kind,
            name: name.into(),
            upfront_cost: upfront,
            monthly_cost: monthly,
            ..Default::default()
        }
    }

    /// Sets effectiveness (builder style).
    pub fn with_effectiveness(mut self, effectiveness: u8) -> Self {
        self.effectiveness = effectiveness;
        self
    }

    /// Sets effort (builder style).
    pub fn with_effort(mut self, effort: u8) -> Self {
        self.effort = effort;
        self
    }

    /// Checks the declared scales.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !(1..=5).contains(&self.effort) {
            return Err(ValidationError::out_of_range("effort", 1, 5, i32::from(self.effort)));
        }
        if !(1..=10).contains(&self.effectiveness) {
            return Err(ValidationError::out_of_range(
                "effectiveness",
                1,
                10,
                i32::from(self.effectiveness),
            ));
        }
        if self.upfront_cost < 0.0 || self.monthly_cost < 0.0 {
            return Err(ValidationError::invalid_format("cost", "must not be negative"));
        }
        Ok(())
    }

    pub fn year1_cost(&self) -> f64 {
        self.upfront_cost + self.monthly_cost * 12.0
    }

    pub fn year3_cost(&self) -> f64 {
        self.upfront_cost + self.monthly_cost * 36.0
    }

    /// Unnamed entries are blank slots and take no part in a comparison.
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Value density of an alternative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ValueScore {
    Finite(f64),
    /// The option costs nothing in its first year.
    Maximal,
}

impl ValueScore {
    fn rank_cmp(&self, other: &ValueScore) -> Ordering {
        match (self, other) {
            (ValueScore::Maximal, ValueScore::Maximal) => Ordering::Equal,
            (ValueScore::Maximal, ValueScore::Finite(_)) => Ordering::Greater,
            (ValueScore::Finite(_), ValueScore::Maximal) => Ordering::Less,
            (ValueScore::Finite(a), ValueScore::Finite(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
        }
    }
}

impl fmt::Display for ValueScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueScore::Finite(v) => write!(f, "{:.2}", v),
            ValueScore::Maximal => write!(f, "∞"),
        }
    }
}

/// An alternative with its derived costs and rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub rank: usize,
    pub alternative: Alternative,
    pub year1_cost: f64,
    pub year3_cost: f64,
    pub value_score: ValueScore,
}

/// Ranked list of at least two alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub ranked: Vec<RankedAlternative>,
}

impl ComparisonResult {
    /// Rank-1 alternative.
    pub fn winner(&self) -> Option<&RankedAlternative> {
        self.ranked.first()
    }

    /// True when the winner costs nothing in its first year.
    pub fn winner_is_free(&self) -> bool {
        self.winner()
            .map(|w| w.value_score == ValueScore::Maximal)
            .unwrap_or(false)
    }
}

/// Outcome of a comparison request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComparisonOutcome {
    Ranked(ComparisonResult),
    /// Fewer than two named alternatives were supplied.
    Insufficient { valid: usize },
}

impl ComparisonOutcome {
    pub fn ranked(&self) -> Option<&ComparisonResult> {
        match self {
            ComparisonOutcome::Ranked(result) => Some(result),
            ComparisonOutcome::Insufficient { .. } => None,
        }
    }
}

/// Minimum number of named alternatives needed for a ranking.
pub const MIN_ALTERNATIVES: usize = 2;

/// Comparator for alternatives.
pub struct AlternativesComparator;

impl AlternativesComparator {
    /// Value density of one alternative.
    pub fn value_score(alternative: &Alternative) -> ValueScore {
        let year1 = alternative.year1_cost();
        if year1 == 0.0 {
            ValueScore::Maximal
        } else {
            ValueScore::Finite(f64::from(alternative.effectiveness) / year1 * 10_000.0)
        }
    }

    /// Ranks the present, named entries.
    pub fn compare<'a, I>(entries: I) -> ComparisonOutcome
    where
        I: IntoIterator<Item = Option<&'a Alternative>>,
    {
        let valid: Vec<&Alternative> = entries
            .into_iter()
            .flatten()
            .filter(|a| a.is_named())
            .collect();

        if valid.len() < MIN_ALTERNATIVES {
            return ComparisonOutcome::Insufficient { valid: valid.len() };
        }

        let mut scored: Vec<RankedAlternative> = valid
            .into_iter()
            .map(|alt| RankedAlternative {
                rank: 0,
                year1_cost: alt.year1_cost(),
                year3_cost: alt.year3_cost(),
                value_score: Self::value_score(alt),
                alternative: alt.clone(),
            })
            .collect();

        // Vec::sort_by is stable
        scored.sort_by(|a, b| {
            b.value_score.rank_cmp(&a.value_score).then_with(|| {
                if a.value_score == ValueScore::Maximal && b.value_score == ValueScore::Maximal {
                    b.alternative.effectiveness.cmp(&a.alternative.effectiveness)
                } else {
                    Ordering::Equal
                }
            })
        });

        for (i, entry) in scored.iter_mut().enumerate() {
            entry.rank = i + 1;
        }

        ComparisonOutcome::Ranked(ComparisonResult { ranked: scored })
    }

    /// Convenience over a plain slice.
    pub fn compare_all(alternatives: &[Alternative]) -> ComparisonOutcome {
        Self::compare(alternatives.iter().map(Some))
    }
}

/// Editable set of alternative slots; removed slots stay empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonWorksheet {
    slots: Vec<Option<Alternative>>,
}

impl ComparisonWorksheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a default alternative and returns its slot index.
    pub fn add(&mut self) -> usize {
        self.slots.push(Some(Alternative::default()));
        self.slots.len() - 1
    }

    /// Adds a filled alternative and returns its slot index.
    pub fn push(&mut self, alternative: Alternative) -> usize {
        self.slots.push(Some(alternative));
        self.slots.len() - 1
    }

    /// Replaces the alternative in an occupied slot.
    pub fn update(&mut self, index: usize, alternative: Alternative) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_some() => {
                *slot = Some(alternative);
                true
            }
            _ => false,
        }
    }

    /// Empties a slot; later indices do not shift.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Alternative> {
        self.slots.get(index).and_then(|s| s.as_ref())
    }

    /// Number of slots, including emptied ones.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Occupied alternatives in slot order.
    pub fn alternatives(&self) -> Vec<Alternative> {
        self.slots.iter().flatten().cloned().collect()
    }

    pub fn compare(&self) -> ComparisonOutcome {
        AlternativesComparator::compare(self.slots.iter().map(|s| s.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paid(name: &str, upfront: f64, monthly: f64, effectiveness: u8) -> Alternative {
        Alternative::new(AlternativeKind::NewProduct, name, upfront, monthly)
            .with_effectiveness(effectiveness)
    }

    fn ranked(outcome: ComparisonOutcome) -> ComparisonResult {
        match outcome {
            ComparisonOutcome::Ranked(result) => result,
            other => panic!("Expected ranking, got {:?}", other),
        }
    }

    #[test]
    fn value_score_is_effectiveness_per_year1_cost() {
        let alt = paid("Gym", 0.0, 1_000.0, 6);
        assert_eq!(
            AlternativesComparator::value_score(&alt),
            ValueScore::Finite(6.0 / 12_000.0 * 10_000.0)
        );
        assert_eq!(alt.year3_cost(), 36_000.0);
    }

    #[test]
    fn compare_requires_two_named_entries() {
        let one = vec![paid("Only", 100.0, 0.0, 5)];
        assert_eq!(
            AlternativesComparator::compare_all(&one),
            ComparisonOutcome::Insufficient { valid: 1 }
        );

        let unnamed = vec![paid("Named", 100.0, 0.0, 5), paid("   ", 10.0, 0.0, 5)];
        assert_eq!(
            AlternativesComparator::compare_all(&unnamed),
            ComparisonOutcome::Insufficient { valid: 1 }
        );
    }

    #[test]
    fn compare_free_option_outranks_paid() {
        let alts = vec![
            paid("Camera", 45_000.0, 0.0, 10),
            Alternative::new(AlternativeKind::ExistingSolution, "Phone camera", 0.0, 0.0)
                .with_effectiveness(1),
        ];
        let result = ranked(AlternativesComparator::compare_all(&alts));
        assert_eq!(result.ranked[0].alternative.name, "Phone camera");
        assert!(result.winner_is_free());
        assert_eq!(result.ranked[1].rank, 2);
    }

    #[test]
    fn compare_free_options_tie_break_on_effectiveness() {
        let alts = vec![
            paid("Borrow", 0.0, 0.0, 4),
            paid("Library", 0.0, 0.0, 8),
            paid("Buy", 100.0, 0.0, 10),
        ];
        let result = ranked(AlternativesComparator::compare_all(&alts));
        let names: Vec<&str> = result.ranked.iter().map(|r| r.alternative.name.as_str()).collect();
        assert_eq!(names, vec!["Library", "Borrow", "Buy"]);
    }

    #[test]
    fn compare_equal_values_keep_input_order() {
        let alts = vec![
            paid("First", 1_000.0, 0.0, 5),
            paid("Second", 2_000.0, 0.0, 10),
            paid("Third", 500.0, 0.0, 1),
        ];
        let result = ranked(AlternativesComparator::compare_all(&alts));
        let names: Vec<&str> = result.ranked.iter().map(|r| r.alternative.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
        let ranks: Vec<usize> = result.ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn compare_sorts_descending_by_value() {
        let alts = vec![
            paid("Pricey", 50_000.0, 0.0, 9),
            paid("Service", 0.0, 500.0, 7),
            paid("DIY", 2_000.0, 0.0, 4),
        ];
        let result = ranked(AlternativesComparator::compare_all(&alts));
        assert_eq!(result.winner().unwrap().alternative.name, "DIY");
        assert!(!result.winner_is_free());
        assert_eq!(result.ranked[2].alternative.name, "Pricey");
    }

    #[test]
    fn unknown_kind_deserializes_as_unspecified() {
        let alt: Alternative =
            serde_json::from_str(r#"{"kind":"timeshare","name":"X","upfront_cost":1.0}"#).unwrap();
        assert_eq!(alt.kind, AlternativeKind::Unspecified);
        assert_eq!(alt.effort, 3);
        assert_eq!(alt.effectiveness, 5);
    }

    #[test]
    fn validate_checks_scales() {
        assert!(paid("Ok", 10.0, 0.0, 7).validate().is_ok());
        assert!(paid("", 10.0, 0.0, 7).validate().is_err());
        assert!(paid("Bad", 10.0, 0.0, 11).validate().is_err());
        assert!(paid("Bad", 10.0, 0.0, 5).with_effort(0).validate().is_err());
        assert!(paid("Bad", -1.0, 0.0, 5).validate().is_err());
    }

    #[test]
    fn worksheet_remove_leaves_empty_slot() {
        let mut sheet = ComparisonWorksheet::new();
        let a = sheet.push(paid("A", 100.0, 0.0, 5));
        let b = sheet.push(paid("B", 200.0, 0.0, 5));
        let c = sheet.push(paid("C", 0.0, 0.0, 5));

        assert!(sheet.remove(b));
        assert!(!sheet.remove(b));
        assert_eq!(sheet.slot_count(), 3);
        assert!(sheet.get(b).is_none());
        assert_eq!(sheet.get(c).unwrap().name, "C");

        let result = ranked(sheet.compare());
        assert_eq!(result.ranked.len(), 2);
        assert_eq!(result.ranked[0].alternative.name, "C");
        assert_eq!(result.ranked[1].alternative.name, sheet.get(a).unwrap().name);
    }

    #[test]
    fn worksheet_add_uses_defaults_and_update_fills_slot() {
        let mut sheet = ComparisonWorksheet::new();
        let idx = sheet.add();
        assert_eq!(sheet.get(idx), Some(&Alternative::default()));

        assert!(sheet.update(idx, paid("Filled", 10.0, 0.0, 9)));
        assert_eq!(sheet.get(idx).unwrap().effectiveness, 9);
        assert!(!sheet.update(99, paid("Nope", 0.0, 0.0, 1)));

        // default slot has no name, so nothing to compare yet
        sheet.add();
        assert_eq!(sheet.compare(), ComparisonOutcome::Insufficient { valid: 1 });
    }
}
