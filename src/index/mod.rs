//! Dictionary indexing
//!
//! Builds the length, position and presence indices that constraint filtering
//! runs against, and persists them as snapshots.

mod dictionary;
mod id_set;
mod snapshot;
mod word_index;

pub use dictionary::{Dictionary, DictionaryBuilder};
pub use id_set::IdSet;
pub use snapshot::SnapshotError;
pub use word_index::{PositionKey, PresenceKey, WordIndex};
