//! Dictionary construction
//!
//! `DictionaryBuilder` ingests words one at a time and produces a `Dictionary`,
//! the immutable pairing of `WordStore` and `WordIndex`. Once built, a dictionary
//! has no mutating methods and can be shared by reference across any number of
//! sessions.

use super::{IdSet, WordIndex};
use crate::core::{WordId, WordStore};
use tracing::info;

/// Ingestion front-end for a dictionary
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    store: WordStore,
    index: WordIndex,
}

impl DictionaryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next id to `word` and record it in every index
    ///
    /// No validation happens here: any string is accepted, and its character
    /// count becomes its length bucket.
    pub fn ingest(&mut self, word: &str) -> WordId {
        let id = self.store.push(word);
        self.index.insert(id, word);
        id
    }

    /// Ingest every word from an iterator
    pub fn extend<'w, I>(&mut self, words: I)
    where
        I: IntoIterator<Item = &'w str>,
    {
        for word in words {
            self.ingest(word);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Freeze the ingested words into a read-only dictionary
    #[must_use]
    pub fn build(self) -> Dictionary {
        let dictionary = Dictionary {
            store: self.store,
            index: self.index,
        };
        info!(
            words = dictionary.len(),
            lengths = dictionary.index.lengths().len(),
            "dictionary built"
        );
        dictionary
    }
}

/// Read-only word store plus indices
///
/// # Examples
/// ```
/// use word_sieve::index::Dictionary;
///
/// let dictionary = Dictionary::from_words(["crane", "slate", "at"]);
/// assert_eq!(dictionary.len(), 3);
/// assert_eq!(dictionary.words_of_length(5), vec!["crane", "slate"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    pub(crate) store: WordStore,
    pub(crate) index: WordIndex,
}

impl Dictionary {
    /// Build a dictionary from a list of words
    pub fn from_words<'w, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'w str>,
    {
        let mut builder = DictionaryBuilder::new();
        builder.extend(words);
        builder.build()
    }

    #[inline]
    #[must_use]
    pub const fn store(&self) -> &WordStore {
        &self.store
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> &WordIndex {
        &self.index
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.store.get(id)
    }

    /// Ids of every word with `length` letters; empty if none were ingested
    #[must_use]
    pub fn by_length(&self, length: usize) -> IdSet {
        self.index.by_length(length).cloned().unwrap_or_default()
    }

    /// Words with `length` letters, in ingestion order
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<&str> {
        self.resolve(&self.by_length(length))
    }

    /// Every ingested id
    #[must_use]
    pub fn universe(&self) -> IdSet {
        self.store.ids().collect()
    }

    /// Resolve ids back to words, skipping any unknown id
    #[must_use]
    pub fn resolve(&self, ids: &IdSet) -> Vec<&str> {
        ids.iter().filter_map(|id| self.store.get(id)).collect()
    }

    /// Number of words per ingested length, ascending by length
    #[must_use]
    pub fn length_counts(&self) -> Vec<(usize, usize)> {
        self.index
            .lengths()
            .into_iter()
            .map(|length| {
                let count = self.index.by_length(length).map_or(0, IdSet::len);
                (length, count)
            })
            .collect()
    }
}
