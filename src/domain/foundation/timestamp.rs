//! Timestamp value object for immutable points in time.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::ValidationError;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the calendar date (UTC) of this timestamp.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// True when every specifier in `fmt` is known to chrono.
    pub fn is_valid_format(fmt: &str) -> bool {
        !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
    }

    /// Formats the timestamp with a chrono format string.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the pattern contains an unknown specifier
    pub fn format(&self, fmt: &str) -> Result<String, ValidationError> {
        let mut out = String::new();
        write!(out, "{}", self.0.format(fmt))
            .map_err(|_| ValidationError::invalid_format("date_format", fmt))?;
        Ok(out)
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn fixed() -> Timestamp {
        let dt = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Timestamp::from_datetime(dt)
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_date_is_utc_calendar_day() {
        let date = fixed().date();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn timestamp_format_uses_pattern() {
        assert_eq!(fixed().format("%Y-%m-%d").unwrap(), "2024-01-15");
    }

    #[test]
    fn timestamp_format_rejects_unknown_specifier() {
        assert!(!Timestamp::is_valid_format("%Q"));
        assert!(Timestamp::is_valid_format("%d/%m/%Y %H:%M"));

        let err = fixed().format("%Q").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn timestamp_is_before_orders_points() {
        let earlier = fixed();
        let later = Timestamp::now();
        assert!(earlier.is_before(&later));
        assert!(!later.is_before(&earlier));
    }

    #[test]
    fn timestamp_roundtrips_through_json() {
        let ts = fixed();
        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.contains("2024-01-15"));
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
