//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `DecisionHistoryRepository` - Persistence of scored decisions and outcomes
//!
//! ## Export Ports
//!
//! - `HistoryCodec` - Encoding a history snapshot into a transfer format

mod decision_history_repository;
mod history_codec;

pub use decision_history_repository::DecisionHistoryRepository;
pub use history_codec::{ExportError, ExportFormat, ExportedHistory, HistoryCodec};
