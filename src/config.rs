//! Runtime configuration
//!
//! `Config` is the resolved form of the command-line flags. It knows how to
//! produce the dictionary (snapshot cache, word list file, or the embedded
//! sample) and the optional frequency table.

use crate::index::Dictionary;
use crate::scoring::{FrequencyTable, RankStrategy, Scorer};
use crate::wordlists::loader::{load_dictionary, load_frequencies, sample_dictionary};
use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use tracing::{info, warn};

/// Default target word length
pub const DEFAULT_SIZE: usize = 5;

/// Default number of ranked rows printed by commands
pub const DEFAULT_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Word list file; the embedded sample is used when absent
    pub dictionary: Option<PathBuf>,
    /// Index cache, read if present and written after a fresh build
    pub snapshot: Option<PathBuf>,
    /// External word frequency table
    pub frequencies: Option<PathBuf>,
    pub size: usize,
    pub strategy: RankStrategy,
    pub limit: usize,
    /// Pools smaller than this score against the baseline letter table; 0 disables
    pub baseline_threshold: usize,
    /// Show a progress bar while ingesting large word lists
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: None,
            snapshot: None,
            frequencies: None,
            size: DEFAULT_SIZE,
            strategy: RankStrategy::default(),
            limit: DEFAULT_LIMIT,
            baseline_threshold: 0,
            show_progress: false,
        }
    }
}

impl Config {
    /// Reject settings no command can work with
    ///
    /// # Errors
    /// Returns an error for a zero word length or a zero row limit.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            bail!("word length must be at least 1");
        }
        if self.limit == 0 {
            bail!("limit must be at least 1");
        }
        Ok(())
    }

    #[must_use]
    pub const fn scorer(&self) -> Scorer {
        Scorer::new().with_baseline_threshold(self.baseline_threshold)
    }

    /// Load or build the dictionary
    ///
    /// A readable snapshot wins. An unreadable one is logged and rebuilt from
    /// the word list, and the rebuilt index is written back to the snapshot path.
    ///
    /// # Errors
    /// Returns an error if the word list cannot be read or the snapshot cannot
    /// be written.
    pub fn load_dictionary(&self) -> Result<Dictionary> {
        if let Some(snapshot) = &self.snapshot
            && snapshot.exists()
        {
            match Dictionary::load_snapshot(snapshot) {
                Ok(dictionary) => return Ok(dictionary),
                Err(e) => warn!(path = %snapshot.display(), error = %e, "ignoring unreadable snapshot"),
            }
        }

        let dictionary = match &self.dictionary {
            Some(path) => load_dictionary(path, self.show_progress)
                .with_context(|| format!("loading word list {}", path.display()))?,
            None => {
                info!("no word list given, using embedded sample");
                sample_dictionary()
            }
        };

        if let Some(snapshot) = &self.snapshot {
            dictionary
                .save_snapshot(snapshot)
                .with_context(|| format!("writing snapshot {}", snapshot.display()))?;
        }
        Ok(dictionary)
    }

    /// Load the frequency table, or an empty one when none is configured
    ///
    /// # Errors
    /// Returns an error if the configured file cannot be read or parsed.
    pub fn load_frequencies(&self) -> Result<FrequencyTable> {
        match &self.frequencies {
            Some(path) => load_frequencies(path)
                .with_context(|| format!("loading frequency table {}", path.display())),
            None => Ok(FrequencyTable::new()),
        }
    }
}
