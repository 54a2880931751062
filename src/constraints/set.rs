//! Accumulated letter constraints for one query
//!
//! Three kinds of knowledge per letter, all scoped to one target length:
//! - correct: positions where the letter is confirmed (green)
//! - include: letter is present but confirmed absent at these positions (yellow)
//! - exclude: letter is absent from the word (gray)
//!
//! Separately, a set may carry one "using" quota: a pool of letters of which
//! at least some number must appear somewhere in the word.
//!
//! A letter may sit in several categories at once; words with repeated letters
//! need that.

use std::collections::{BTreeMap, BTreeSet};

/// Correct/include/exclude hints for words of a single length
///
/// Position-based categories merge: recording more positions for a letter adds to
/// what is already known. Exclusion toggles: excluding an excluded letter lifts
/// the exclusion.
///
/// # Examples
/// ```
/// use word_sieve::constraints::ConstraintSet;
///
/// let mut constraints = ConstraintSet::new(5);
/// constraints.set_correct('a', [0]);
/// constraints.set_include('p', [1]);
/// assert!(constraints.toggle_exclude('n'));
/// assert!(!constraints.toggle_exclude('n'));
/// assert!(constraints.excludes().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    size: usize,
    corrects: BTreeMap<char, BTreeSet<usize>>,
    includes: BTreeMap<char, BTreeSet<usize>>,
    excludes: BTreeSet<char>,
    using: Option<LetterQuota>,
}

/// Words must contain at least `min_matches` distinct letters from `letters`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterQuota {
    pub letters: BTreeSet<char>,
    pub min_matches: usize,
}

impl ConstraintSet {
    /// Empty constraints for words of `size` letters
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Target word length
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Switch to a new target length, discarding every constraint
    pub fn set_size(&mut self, size: usize) {
        *self = Self::new(size);
    }

    #[must_use]
    pub const fn corrects(&self) -> &BTreeMap<char, BTreeSet<usize>> {
        &self.corrects
    }

    #[must_use]
    pub const fn includes(&self) -> &BTreeMap<char, BTreeSet<usize>> {
        &self.includes
    }

    #[must_use]
    pub const fn excludes(&self) -> &BTreeSet<char> {
        &self.excludes
    }

    #[must_use]
    pub const fn using(&self) -> Option<&LetterQuota> {
        self.using.as_ref()
    }

    /// True when no constraint of any kind is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corrects.is_empty()
            && self.includes.is_empty()
            && self.excludes.is_empty()
            && self.using.is_none()
    }

    /// Merge confirmed positions for `letter`
    ///
    /// An empty position list clears the letter instead.
    pub fn set_correct(&mut self, letter: char, positions: impl IntoIterator<Item = usize>) {
        merge_positions(&mut self.corrects, self.size, letter, positions);
    }

    /// Merge confirmed wrong positions for a letter known to be present
    ///
    /// An empty position list clears the letter instead.
    pub fn set_include(&mut self, letter: char, positions: impl IntoIterator<Item = usize>) {
        merge_positions(&mut self.includes, self.size, letter, positions);
    }

    /// Record each character of `text` as correct, starting at `offset`
    pub fn set_substring(&mut self, offset: usize, text: &str) {
        for (i, letter) in text.chars().enumerate() {
            self.set_correct(letter, [offset + i]);
        }
    }

    /// Drop every correct position recorded for `letter`
    pub fn clear_correct_letter(&mut self, letter: char) {
        self.corrects.remove(&letter);
    }

    /// Drop every include position recorded for `letter`
    pub fn clear_include_letter(&mut self, letter: char) {
        self.includes.remove(&letter);
    }

    /// Flip whether `letter` is excluded; returns true if it is now excluded
    pub fn toggle_exclude(&mut self, letter: char) -> bool {
        if self.excludes.remove(&letter) {
            false
        } else {
            self.excludes.insert(letter);
            true
        }
    }

    #[must_use]
    pub fn is_excluded(&self, letter: char) -> bool {
        self.excludes.contains(&letter)
    }

    pub fn clear_corrects(&mut self) {
        self.corrects.clear();
    }

    pub fn clear_includes(&mut self) {
        self.includes.clear();
    }

    pub fn clear_excludes(&mut self) {
        self.excludes.clear();
    }

    /// Require at least `min_matches` of `letters` somewhere in the word
    ///
    /// Replaces any earlier quota. An empty letter pool clears it.
    pub fn set_using(&mut self, letters: impl IntoIterator<Item = char>, min_matches: usize) {
        let letters: BTreeSet<char> = letters.into_iter().collect();
        self.using = (!letters.is_empty()).then_some(LetterQuota {
            letters,
            min_matches,
        });
    }

    pub fn clear_using(&mut self) {
        self.using = None;
    }

    /// Clear every category, keeping the target length
    pub fn clear_all(&mut self) {
        self.set_size(self.size);
    }

    /// Union of every position pinned by a correct letter
    #[must_use]
    pub fn locked_positions(&self) -> BTreeSet<usize> {
        self.corrects.values().flatten().copied().collect()
    }
}

fn merge_positions(
    category: &mut BTreeMap<char, BTreeSet<usize>>,
    size: usize,
    letter: char,
    positions: impl IntoIterator<Item = usize>,
) {
    let positions: BTreeSet<usize> = positions.into_iter().collect();
    debug_assert!(
        positions.iter().all(|&p| p < size),
        "position out of range for size {size}: {positions:?}"
    );

    if positions.is_empty() {
        category.remove(&letter);
    } else {
        category.entry(letter).or_default().extend(positions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(raw: &[usize]) -> BTreeSet<usize> {
        raw.iter().copied().collect()
    }

    #[test]
    fn new_is_empty() {
        let constraints = ConstraintSet::new(5);
        assert_eq!(constraints.size(), 5);
        assert!(constraints.is_empty());
    }

    #[test]
    fn correct_positions_merge() {
        let mut constraints = ConstraintSet::new(5);
        constraints.set_correct('e', [1]);
        constraints.set_correct('e', [4, 1]);
        assert_eq!(constraints.corrects()[&'e'], positions(&[1, 4]));
    }

    #[test]
    fn empty_positions_clear_the_letter() {
        let mut constraints = ConstraintSet::new(5);
        constraints.set_correct('e', [1]);
        constraints.set_include('r', [0, 2]);

        constraints.set_correct('e', []);
        constraints.set_include('r', std::iter::empty());

        assert!(constraints.is_empty());
    }

    #[test]
    fn clear_letter_leaves_other_letters() {
        let mut constraints = ConstraintSet::new(5);
        constraints.set_include('r', [0]);
        constraints.set_include('s', [3]);
        constraints.clear_include_letter('r');

        assert_eq!(constraints.includes().len(), 1);
        assert!(constraints.includes().contains_key(&'s'));
    }

    #[test]
    fn exclude_toggles() {
        let mut constraints = ConstraintSet::new(5);
        assert!(constraints.toggle_exclude('z'));
        assert!(constraints.is_excluded('z'));
        assert!(!constraints.toggle_exclude('z'));
        assert!(!constraints.is_excluded('z'));
    }

    #[test]
    fn letter_may_be_in_several_categories() {
        let mut constraints = ConstraintSet::new(5);
        constraints.set_correct('e', [4]);
        constraints.set_include('e', [1]);
        constraints.toggle_exclude('e');

        assert!(constraints.corrects().contains_key(&'e'));
        assert!(constraints.includes().contains_key(&'e'));
        assert!(constraints.is_excluded('e'));
    }

    #[test]
    fn set_size_discards_constraints() {
        let mut constraints = ConstraintSet::new(5);
        constraints.set_correct('a', [0]);
        constraints.toggle_exclude('q');
        constraints.set_size(6);

        assert_eq!(constraints, ConstraintSet::new(6));
    }

    #[test]
    fn substring_expands_to_corrects() {
        let mut constraints = ConstraintSet::new(5);
        constraints.set_substring(2, "ple");

        assert_eq!(constraints.corrects()[&'p'], positions(&[2]));
        assert_eq!(constraints.corrects()[&'l'], positions(&[3]));
        assert_eq!(constraints.corrects()[&'e'], positions(&[4]));
    }

    #[test]
    fn bulk_clears() {
        let mut constraints = ConstraintSet::new(5);
        constraints.set_correct('a', [0]);
        constraints.set_include('b', [1]);
        constraints.toggle_exclude('c');

        constraints.clear_corrects();
        assert!(constraints.corrects().is_empty());
        constraints.clear_includes();
        assert!(constraints.includes().is_empty());
        constraints.clear_excludes();
        assert!(constraints.is_empty());

        constraints.set_correct('a', [0]);
        constraints.clear_all();
        assert_eq!(constraints, ConstraintSet::new(5));
    }

    #[test]
    fn locked_positions_union() {
        let mut constraints = ConstraintSet::new(5);
        constraints.set_correct('a', [0]);
        constraints.set_correct('e', [4, 2]);
        constraints.set_include('x', [1]);

        assert_eq!(constraints.locked_positions(), positions(&[0, 2, 4]));
    }

    #[test]
    fn using_quota_replaces_and_clears() {
        let mut constraints = ConstraintSet::new(5);
        constraints.set_using(['r', 's', 't', 's'], 2);
        let quota = constraints.using().unwrap();
        assert_eq!(quota.letters.len(), 3);
        assert_eq!(quota.min_matches, 2);
        assert!(!constraints.is_empty());

        constraints.set_using(['a'], 1);
        assert_eq!(constraints.using().unwrap().letters.len(), 1);

        constraints.set_using([], 1);
        assert!(constraints.using().is_none());

        constraints.set_using(['a'], 1);
        constraints.clear_using();
        assert!(constraints.is_empty());

        constraints.set_using(['a'], 1);
        constraints.clear_all();
        assert!(constraints.using().is_none());
    }
}
