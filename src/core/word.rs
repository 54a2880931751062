//! Word storage
//!
//! `WordStore` hands out dense, zero-based identifiers in ingestion order and is the
//! only owner of word text once a dictionary is built. Every index refers to words
//! through these identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense identifier of an ingested word
///
/// Assigned sequentially from zero; stable for the lifetime of the loaded dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WordId(u32);

impl WordId {
    /// Create an identifier from its raw index
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw index into the store
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier → word mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStore {
    words: Vec<String>,
}

impl WordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word and return the identifier assigned to it
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` words are pushed.
    pub fn push(&mut self, word: impl Into<String>) -> WordId {
        let id = u32::try_from(self.words.len()).expect("word store exceeds u32 identifiers");
        self.words.push(word.into());
        WordId(id)
    }

    /// Resolve an identifier back to its word
    #[inline]
    #[must_use]
    pub fn get(&self, id: WordId) -> Option<&str> {
        self.words.get(id.index()).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All identifiers in ingestion order
    pub fn ids(&self) -> impl Iterator<Item = WordId> + '_ {
        (0..self.words.len()).map(|i| WordId(i as u32))
    }

    /// All `(id, word)` pairs in ingestion order
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &str)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| (WordId(i as u32), w.as_str()))
    }
}

/// Number of letters in a word
///
/// Lengths are measured in characters, not bytes, so dictionaries with
/// non-ASCII letters partition correctly.
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}
