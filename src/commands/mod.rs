//! Command implementations

pub mod filter;
pub mod simple;
pub mod snapshot;
pub mod stats;

pub use filter::{FilterResult, run_filter};
pub use simple::{Reply, SimpleSession, run_simple};
pub use snapshot::{SnapshotSummary, write_snapshot};
pub use stats::{DictionaryStats, dictionary_stats};
