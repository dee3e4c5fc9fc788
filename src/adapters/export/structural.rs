//! Structural export: the full snapshot as JSON or YAML.

use crate::domain::history::{DecisionHistory, HistorySnapshot};
use crate::ports::{ExportError, ExportFormat, HistoryCodec};

/// Pretty-printed JSON of every field of every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonHistoryCodec;

impl JsonHistoryCodec {
    pub fn decode(bytes: &[u8]) -> Result<DecisionHistory, ExportError> {
        let snapshot: HistorySnapshot = serde_json::from_slice(bytes)?;
        Ok(DecisionHistory::from_snapshot(snapshot))
    }
}

impl HistoryCodec for JsonHistoryCodec {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn encode(&self, snapshot: &HistorySnapshot) -> Result<Vec<u8>, ExportError> {
        if snapshot.is_empty() {
            return Err(ExportError::Empty);
        }
        Ok(serde_json::to_vec_pretty(snapshot)?)
    }
}

/// YAML of every field of every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlHistoryCodec;

impl YamlHistoryCodec {
    pub fn decode(bytes: &[u8]) -> Result<DecisionHistory, ExportError> {
        let snapshot: HistorySnapshot = serde_yaml::from_slice(bytes)?;
        Ok(DecisionHistory::from_snapshot(snapshot))
    }
}

impl HistoryCodec for YamlHistoryCodec {
    fn format(&self) -> ExportFormat {
        ExportFormat::Yaml
    }

    fn encode(&self, snapshot: &HistorySnapshot) -> Result<Vec<u8>, ExportError> {
        if snapshot.is_empty() {
            return Err(ExportError::Empty);
        }
        Ok(serde_yaml::to_string(snapshot)?.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::export::test_support::sample_history;

    #[test]
    fn json_keeps_every_field() {
        let snapshot = sample_history();
        let bytes = JsonHistoryCodec.encode(&snapshot).unwrap();
        let restored = JsonHistoryCodec::decode(&bytes).unwrap();
        assert_eq!(restored.snapshot(), snapshot);
    }

    #[test]
    fn yaml_keeps_every_field() {
        let snapshot = sample_history();
        let bytes = YamlHistoryCodec.encode(&snapshot).unwrap();
        let restored = YamlHistoryCodec::decode(&bytes).unwrap();
        assert_eq!(restored.snapshot(), snapshot);
    }

    #[test]
    fn json_uses_wire_names() {
        let bytes = JsonHistoryCodec.encode(&sample_history()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let newest = &value["decisions"][0];
        assert_eq!(newest["recommendation"], "WAIT_1WEEK");
        assert_eq!(newest["mode"], "quick");
        assert!(newest["outcome"].is_null());
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(
            JsonHistoryCodec::decode(b"{\"decisions\": 3}"),
            Err(ExportError::Json(_))
        ));
        assert!(matches!(
            YamlHistoryCodec::decode(b"decisions: nope"),
            Err(ExportError::Yaml(_))
        ));
    }

    #[test]
    fn empty_snapshot_is_refused() {
        let empty = HistorySnapshot::default();
        assert!(matches!(JsonHistoryCodec.encode(&empty), Err(ExportError::Empty)));
        assert!(matches!(YamlHistoryCodec.encode(&empty), Err(ExportError::Empty)));
    }
}
