//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Decision history repositories (in-memory, YAML file)
//! - `export` - History codecs (flat CSV, structural JSON/YAML)

pub mod export;
pub mod storage;

pub use export::{codec_for, FlatCsvCodec, FlatHistoryRow, JsonHistoryCodec, YamlHistoryCodec};
pub use storage::{FileHistoryRepository, InMemoryHistoryRepository};
