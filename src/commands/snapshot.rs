//! Snapshot export command

use crate::index::{Dictionary, SnapshotError};
use std::path::Path;
use std::time::{Duration, Instant};

/// Outcome of writing a snapshot
pub struct SnapshotSummary {
    pub words: usize,
    pub bytes: u64,
    pub duration: Duration,
}

/// Write `dictionary` to `path`
///
/// # Errors
///
/// Returns an error if the snapshot cannot be encoded or written.
pub fn write_snapshot(dictionary: &Dictionary, path: &Path) -> Result<SnapshotSummary, SnapshotError> {
    let start = Instant::now();
    dictionary.save_snapshot(path)?;
    let bytes = std::fs::metadata(path)?.len();

    Ok(SnapshotSummary {
        words: dictionary.len(),
        bytes,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.snapshot");
        let dictionary = Dictionary::from_words(["crane", "slate"]);

        let summary = write_snapshot(&dictionary, &path).unwrap();
        assert_eq!(summary.words, 2);
        assert!(summary.bytes > 0);
        assert_eq!(Dictionary::load_snapshot(&path).unwrap(), dictionary);
    }
}
