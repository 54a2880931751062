//! Rule evaluation against a built dictionary
//!
//! Every query starts from the full length bucket and folds compiled rules into
//! it. Missing index entries are strict: intersecting with one empties the
//! working set, subtracting one changes nothing. The only lenient case is a
//! length that was never ingested, which yields the whole dictionary.
//!
//! A "using" quota is checked after the rules: each surviving id counts how
//! many of the quota's presence entries contain it.

use super::rule::{Rule, compile};
use crate::constraints::ConstraintSet;
use crate::index::{Dictionary, IdSet};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Evaluates constraint sets against a shared dictionary
#[derive(Debug, Clone, Copy)]
pub struct FilterEngine<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> FilterEngine<'d> {
    #[must_use]
    pub const fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Words matching `constraints`, in ingestion order
    ///
    /// # Examples
    /// ```
    /// use word_sieve::constraints::ConstraintSet;
    /// use word_sieve::filter::FilterEngine;
    /// use word_sieve::index::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["apple", "apply", "angle", "ample"]);
    /// let mut constraints = ConstraintSet::new(5);
    /// constraints.set_correct('a', [0]);
    /// constraints.set_include('p', [1]);
    /// constraints.toggle_exclude('n');
    ///
    /// assert_eq!(FilterEngine::new(&dictionary).apply(&constraints), vec!["ample"]);
    /// ```
    #[must_use]
    pub fn apply(&self, constraints: &ConstraintSet) -> Vec<&'d str> {
        self.dictionary.resolve(&self.apply_ids(constraints))
    }

    /// Ids matching `constraints`
    ///
    /// Rules are reordered most-selective first; the result does not depend on
    /// the order.
    #[must_use]
    pub fn apply_ids(&self, constraints: &ConstraintSet) -> IdSet {
        let mut rules = compile(constraints);
        self.order_by_selectivity(constraints.size(), &mut rules);
        debug!(
            size = constraints.size(),
            rules = rules.len(),
            "compiled constraints"
        );

        let mut ids = self.apply_rules(constraints.size(), &rules);
        if let Some(quota) = constraints.using() {
            self.keep_using(&mut ids, constraints.size(), &quota.letters, quota.min_matches);
        }
        debug!(size = constraints.size(), matches = ids.len(), "filter applied");
        ids
    }

    /// Ids matching `constraints` that also contain at least `min_matches`
    /// distinct letters of `letters`
    ///
    /// A `min_matches` of 0 adds no restriction.
    ///
    /// # Examples
    /// ```
    /// use word_sieve::constraints::ConstraintSet;
    /// use word_sieve::filter::FilterEngine;
    /// use word_sieve::index::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["crane", "slate", "moody", "stair"]);
    /// let engine = FilterEngine::new(&dictionary);
    /// let ids = engine.apply_using(&ConstraintSet::new(5), ['r', 's', 't'], 2);
    /// assert_eq!(dictionary.resolve(&ids), vec!["slate", "stair"]);
    /// ```
    #[must_use]
    pub fn apply_using(
        &self,
        constraints: &ConstraintSet,
        letters: impl IntoIterator<Item = char>,
        min_matches: usize,
    ) -> IdSet {
        let letters: BTreeSet<char> = letters.into_iter().collect();
        let mut ids = self.apply_ids(constraints);
        self.keep_using(&mut ids, constraints.size(), &letters, min_matches);
        ids
    }

    /// Fold `rules` in the given order over the bucket for `size`
    #[must_use]
    pub fn apply_rules(&self, size: usize, rules: &[Rule]) -> IdSet {
        let Some(bucket) = self.dictionary.index().by_length(size) else {
            debug!(size, "no words of this length, returning whole dictionary");
            return self.dictionary.universe();
        };

        let mut working = bucket.clone();
        for &rule in rules {
            if working.is_empty() {
                break;
            }
            self.fold(&mut working, size, rule);
            trace!(%rule, remaining = working.len(), "rule applied");
        }
        working
    }

    fn fold(&self, working: &mut IdSet, size: usize, rule: Rule) {
        let index = self.dictionary.index();
        match rule {
            Rule::Intersect { letter, position } => match index.at_position(size, letter, position) {
                Some(entry) => working.intersect_with(entry),
                None => working.clear(),
            },
            Rule::IntersectPresence { letter } => match index.containing(size, letter) {
                Some(entry) => working.intersect_with(entry),
                None => working.clear(),
            },
            Rule::Subtract { letter, position } => {
                if let Some(entry) = index.at_position(size, letter, position) {
                    working.subtract(entry);
                }
            }
        }
    }

    fn keep_using(&self, ids: &mut IdSet, size: usize, letters: &BTreeSet<char>, min_matches: usize) {
        let index = self.dictionary.index();
        // an unseen length stays unfiltered
        if min_matches == 0 || index.by_length(size).is_none() {
            return;
        }

        let entries: Vec<&IdSet> = letters
            .iter()
            .filter_map(|&letter| index.containing(size, letter))
            .collect();
        if entries.len() < min_matches {
            ids.clear();
        } else {
            ids.retain(|id| entries.iter().filter(|entry| entry.contains(id)).count() >= min_matches);
        }
        trace!(letters = letters.len(), min_matches, remaining = ids.len(), "using quota applied");
    }

    /// Intersections first, smallest entry first; subtractions after
    fn order_by_selectivity(&self, size: usize, rules: &mut [Rule]) {
        let index = self.dictionary.index();
        let entry_len = |rule: &Rule| match *rule {
            Rule::Intersect { letter, position } | Rule::Subtract { letter, position } => index
                .at_position(size, letter, position)
                .map_or(0, IdSet::len),
            Rule::IntersectPresence { letter } => index.containing(size, letter).map_or(0, IdSet::len),
        };
        rules.sort_by_key(|rule| (!rule.is_intersection(), entry_len(rule)));
    }
}
