//! Inverted indices over the word store
//!
//! Three maps, all partitioned by word length:
//! - length index: `length → ids`
//! - position index: `(length, letter, position) → ids`
//! - presence index: `(length, letter) → ids`

use super::IdSet;
use crate::core::WordId;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Key of a position-index entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionKey {
    pub length: usize,
    pub letter: char,
    pub position: usize,
}

/// Key of a presence-index entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresenceKey {
    pub length: usize,
    pub letter: char,
}

/// Length, position and presence indices
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordIndex {
    lengths: FxHashMap<usize, IdSet>,
    positions: FxHashMap<PositionKey, IdSet>,
    presence: FxHashMap<PresenceKey, IdSet>,
}

impl WordIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `word` under `id` in all three indices
    ///
    /// Ids must be inserted in ascending order.
    pub fn insert(&mut self, id: WordId, word: &str) {
        let length = word.chars().count();
        self.lengths.entry(length).or_default().push(id);

        for (position, letter) in word.chars().enumerate() {
            self.positions
                .entry(PositionKey {
                    length,
                    letter,
                    position,
                })
                .or_default()
                .push(id);
            // IdSet::push ignores the id when it was just recorded, so
            // repeated letters land in the presence entry once.
            self.presence
                .entry(PresenceKey { length, letter })
                .or_default()
                .push(id);
        }
    }

    /// All ids of words with `length` letters
    #[must_use]
    pub fn by_length(&self, length: usize) -> Option<&IdSet> {
        self.lengths.get(&length)
    }

    /// Ids of `length`-letter words with `letter` at `position`
    #[must_use]
    pub fn at_position(&self, length: usize, letter: char, position: usize) -> Option<&IdSet> {
        self.positions.get(&PositionKey {
            length,
            letter,
            position,
        })
    }

    /// Ids of `length`-letter words containing `letter` anywhere
    #[must_use]
    pub fn containing(&self, length: usize, letter: char) -> Option<&IdSet> {
        self.presence.get(&PresenceKey { length, letter })
    }

    /// Ingested lengths in ascending order
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.lengths.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    #[cfg(test)]
    pub(crate) fn position_entries(&self) -> impl Iterator<Item = (&PositionKey, &IdSet)> {
        self.positions.iter()
    }

    #[cfg(test)]
    pub(crate) fn presence_entries(&self) -> impl Iterator<Item = (&PresenceKey, &IdSet)> {
        self.presence.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(words: &[&str]) -> WordIndex {
        let mut index = WordIndex::new();
        for (i, word) in words.iter().enumerate() {
            index.insert(WordId::new(i as u32), word);
        }
        index
    }

    fn ids(set: Option<&IdSet>) -> Vec<usize> {
        set.map(|s| s.iter().map(WordId::index).collect())
            .unwrap_or_default()
    }

    #[test]
    fn length_buckets() {
        let index = build(&["crane", "at", "slate", "on"]);
        assert_eq!(ids(index.by_length(5)), vec![0, 2]);
        assert_eq!(ids(index.by_length(2)), vec![1, 3]);
        assert!(index.by_length(7).is_none());
        assert_eq!(index.lengths(), vec![2, 5]);
    }

    #[test]
    fn position_entries_are_length_scoped() {
        let index = build(&["crane", "cat"]);
        assert_eq!(ids(index.at_position(5, 'c', 0)), vec![0]);
        assert_eq!(ids(index.at_position(3, 'c', 0)), vec![1]);
        assert!(index.at_position(5, 'c', 1).is_none());
    }

    #[test]
    fn repeated_letters_recorded_once_in_presence() {
        let index = build(&["speed"]);
        let entry = index.containing(5, 'e').unwrap();
        assert_eq!(entry.len(), 1);
        assert_eq!(ids(index.at_position(5, 'e', 2)), vec![0]);
        assert_eq!(ids(index.at_position(5, 'e', 3)), vec![0]);
    }

    #[test]
    fn non_ascii_letters_index_by_character() {
        let index = build(&["żółw"]);
        assert_eq!(ids(index.by_length(4)), vec![0]);
        assert_eq!(ids(index.at_position(4, 'ó', 1)), vec![0]);
        assert_eq!(ids(index.containing(4, 'ł')), vec![0]);
    }
}
