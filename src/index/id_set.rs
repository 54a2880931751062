//! Sorted identifier sets
//!
//! Index entries are kept as strictly ascending vectors of `WordId`. Because ids
//! are handed out in ascending order during ingestion, building an entry is a
//! plain append, and intersection/difference are linear merges.

use crate::core::WordId;
use serde::{Deserialize, Serialize};

/// Strictly ascending set of word identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSet(Vec<WordId>);

impl IdSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append an id, ignoring it if it is already the last element
    ///
    /// Ids must arrive in non-decreasing order; this holds during ingestion and
    /// lets a word with a repeated letter be recorded once per entry.
    pub fn push(&mut self, id: WordId) {
        match self.0.last() {
            Some(&last) if last == id => {}
            Some(&last) => {
                debug_assert!(last < id, "ids must be pushed in ascending order");
                self.0.push(id);
            }
            None => self.0.push(id),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: WordId) -> bool {
        self.0.binary_search(&id).is_ok()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = WordId> + '_ {
        self.0.iter().copied()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[WordId] {
        &self.0
    }

    /// Keep only ids also present in `other`
    pub fn intersect_with(&mut self, other: &Self) {
        let mut theirs = other.0.iter().peekable();
        self.0.retain(|id| {
            while theirs.next_if(|&other_id| other_id < id).is_some() {}
            theirs.peek().is_some_and(|&other_id| other_id == id)
        });
    }

    /// Remove every id present in `other`
    pub fn subtract(&mut self, other: &Self) {
        let mut theirs = other.0.iter().peekable();
        self.0.retain(|id| {
            while theirs.next_if(|&other_id| other_id < id).is_some() {}
            theirs.peek().is_none_or(|&other_id| other_id != id)
        });
    }

    /// Merge another set into this one
    pub fn union_with(&mut self, other: &Self) {
        let mut merged = Vec::with_capacity(self.0.len() + other.0.len());
        let (mut a, mut b) = (self.0.iter().peekable(), other.0.iter().peekable());
        loop {
            match (a.peek(), b.peek()) {
                (Some(&&x), Some(&&y)) => {
                    if x <= y {
                        merged.push(x);
                        a.next();
                        if x == y {
                            b.next();
                        }
                    } else {
                        merged.push(y);
                        b.next();
                    }
                }
                (Some(_), None) => {
                    merged.extend(a);
                    break;
                }
                (None, Some(_)) => {
                    merged.extend(b);
                    break;
                }
                (None, None) => break,
            }
        }
        self.0 = merged;
    }

    /// Keep only ids for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(WordId) -> bool) {
        self.0.retain(|&id| keep(id));
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<WordId> for IdSet {
    fn from_iter<I: IntoIterator<Item = WordId>>(iter: I) -> Self {
        let mut ids: Vec<WordId> = iter.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        Self(ids)
    }
}

impl<'a> IntoIterator for &'a IdSet {
    type Item = WordId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, WordId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(raw: &[u32]) -> IdSet {
        raw.iter().copied().map(WordId::new).collect()
    }

    #[test]
    fn push_deduplicates_consecutive_ids() {
        let mut s = IdSet::new();
        s.push(WordId::new(1));
        s.push(WordId::new(1));
        s.push(WordId::new(4));
        assert_eq!(s, set(&[1, 4]));
    }

    #[test]
    fn from_iter_sorts_and_dedups() {
        assert_eq!(set(&[5, 1, 3, 1]).as_slice(), set(&[1, 3, 5]).as_slice());
    }

    #[test]
    fn intersection() {
        let mut s = set(&[1, 2, 3, 5, 8]);
        s.intersect_with(&set(&[2, 3, 4, 8, 9]));
        assert_eq!(s, set(&[2, 3, 8]));
    }

    #[test]
    fn intersection_with_empty_is_empty() {
        let mut s = set(&[1, 2, 3]);
        s.intersect_with(&IdSet::new());
        assert!(s.is_empty());
    }

    #[test]
    fn difference() {
        let mut s = set(&[1, 2, 3, 5, 8]);
        s.subtract(&set(&[0, 2, 5, 6]));
        assert_eq!(s, set(&[1, 3, 8]));
    }

    #[test]
    fn retain_keeps_order() {
        let mut s = set(&[1, 2, 3, 4]);
        s.retain(|id| id.index() % 2 == 0);
        assert_eq!(s, set(&[2, 4]));
    }

    #[test]
    fn difference_with_empty_is_identity() {
        let mut s = set(&[1, 2, 3]);
        s.subtract(&IdSet::new());
        assert_eq!(s, set(&[1, 2, 3]));
    }

    #[test]
    fn union() {
        let mut s = set(&[1, 4, 6]);
        s.union_with(&set(&[2, 4, 9]));
        assert_eq!(s, set(&[1, 2, 4, 6, 9]));
    }

    #[test]
    fn contains_uses_sorted_order() {
        let s = set(&[2, 7, 11]);
        assert!(s.contains(WordId::new(7)));
        assert!(!s.contains(WordId::new(8)));
    }
}
