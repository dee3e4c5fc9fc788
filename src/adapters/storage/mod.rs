//! Decision history storage adapters.
//!
//! - `InMemoryHistoryRepository` - Process-local history (demo, tests)
//! - `FileHistoryRepository` - YAML file that survives restarts

mod file_history;
mod in_memory_history;

pub use file_history::FileHistoryRepository;
pub use in_memory_history::InMemoryHistoryRepository;
