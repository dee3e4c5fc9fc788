//! Flat CSV export: one row per decision.

use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::domain::history::{DecisionRecord, HistorySnapshot};
use crate::ports::{ExportError, ExportFormat, HistoryCodec};

const PENDING: &str = "Pending";
const NOT_APPLICABLE: &str = "N/A";

/// One exported row. Column order follows field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatHistoryRow {
    pub date: String,
    pub title: String,
    pub score: u8,
    pub recommendation: String,
    /// Outcome result label, or `Pending`.
    pub outcome: String,
    /// Correctness label, or `N/A`.
    pub correct: String,
    pub notes: String,
}

impl FlatHistoryRow {
    pub fn from_record(record: &DecisionRecord, date_format: &str) -> Result<Self, ExportError> {
        let date = record
            .created_at()
            .format(date_format)
            .map_err(|_| ExportError::DateFormat(date_format.to_string()))?;
        let outcome = record.outcome();
        Ok(Self {
            date,
            title: record.title().to_string(),
            score: record.score().value(),
            recommendation: record.recommendation().label().to_string(),
            outcome: outcome
                .map(|o| o.result.label().to_string())
                .unwrap_or_else(|| PENDING.to_string()),
            correct: outcome
                .map(|o| o.was_correct.label().to_string())
                .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
            notes: outcome.map(|o| o.notes.clone()).unwrap_or_default(),
        })
    }

    pub fn is_pending(&self) -> bool {
        self.outcome == PENDING
    }
}

/// Encodes the history as `date,title,score,recommendation,outcome,correct,notes`.
#[derive(Debug, Clone)]
pub struct FlatCsvCodec {
    date_format: String,
}

impl FlatCsvCodec {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    /// # Errors
    ///
    /// - `DateFormat` if the configured pattern is not a valid strftime pattern
    pub fn rows(&self, snapshot: &HistorySnapshot) -> Result<Vec<FlatHistoryRow>, ExportError> {
        snapshot
            .decisions
            .iter()
            .map(|r| FlatHistoryRow::from_record(r, &self.date_format))
            .collect()
    }

    /// Reads rows back from CSV produced by `encode`.
    pub fn decode<R: Read>(reader: R) -> Result<Vec<FlatHistoryRow>, ExportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for row in csv_reader.deserialize::<FlatHistoryRow>() {
            rows.push(row?);
        }
        Ok(rows)
    }
}

impl Default for FlatCsvCodec {
    fn default() -> Self {
        Self::new("%Y-%m-%d")
    }
}

impl HistoryCodec for FlatCsvCodec {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn encode(&self, snapshot: &HistorySnapshot) -> Result<Vec<u8>, ExportError> {
        if snapshot.is_empty() {
            return Err(ExportError::Empty);
        }

        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in self.rows(snapshot)? {
            writer.serialize(row)?;
        }
        writer
            .into_inner()
            .map_err(|e| ExportError::Csv(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::test_support::sample_history;

    #[test]
    fn empty_history_is_refused() {
        let codec = FlatCsvCodec::default();
        assert!(matches!(
            codec.encode(&HistorySnapshot::default()),
            Err(ExportError::Empty)
        ));
    }

    #[test]
    fn header_and_placeholders() {
        let bytes = FlatCsvCodec::default().encode(&sample_history()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "date,title,score,recommendation,outcome,correct,notes"
        );
        // newest first: the pending decision was recorded last
        let pending = lines.next().unwrap();
        assert!(pending.ends_with(",Pending,N/A,"), "{pending}");
    }

    #[test]
    fn rows_decode_back() {
        let snapshot = sample_history();
        let codec = FlatCsvCodec::default();
        let bytes = codec.encode(&snapshot).unwrap();

        let decoded = FlatCsvCodec::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, codec.rows(&snapshot).unwrap());
        assert!(decoded[0].is_pending());
        assert_eq!(decoded[1].outcome, "Regretted");
        assert_eq!(decoded[1].correct, "yes");
        assert_eq!(decoded[1].notes, "Sold it, \"never again\"");
    }

    #[test]
    fn unknown_date_specifier_is_an_error() {
        let err = FlatCsvCodec::new("%Q").encode(&sample_history()).unwrap_err();
        assert!(matches!(err, ExportError::DateFormat(ref f) if f == "%Q"));
    }
}
