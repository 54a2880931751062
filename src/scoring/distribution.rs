//! Letter frequency distributions
//!
//! Counts every letter occurrence across a candidate pool and turns the counts
//! into percentages. A word's score is the sum of the percentages of its
//! distinct letters: a rough proxy for how much guessing it would tell us.

use std::collections::{BTreeMap, BTreeSet};

/// Reference letter percentages from a large general-purpose word list
///
/// Used when the surviving pool is too small for its own distribution to say
/// much.
const BASELINE_PERCENT: [(char, f64); 26] = [
    ('e', 11.794_077_134_986_226),
    ('s', 9.357_572_398_038_03),
    ('i', 8.127_561_647_517_302),
    ('a', 7.814_704_696_633_743),
    ('r', 7.289_356_984_478_935),
    ('n', 6.155_932_943_626_957),
    ('o', 6.141_654_908_284_62),
    ('t', 6.080_763_286_971_712),
    ('l', 5.679_298_528_522_475),
    ('d', 3.957_115_500_907_075),
    ('c', 3.791_238_325_606_396),
    ('u', 3.485_940_334_609_958),
    ('g', 2.930_356_782_906_672),
    ('p', 2.833_350_131_021_971),
    ('m', 2.764_899_549_821_944),
    ('h', 2.353_776_120_405_832),
    ('b', 2.176_140_563_058_523),
    ('y', 1.533_628_972_653_363),
    ('f', 1.439_981_858_496_271),
    ('k', 1.232_950_346_032_385),
    ('w', 1.055_314_788_685_077),
    ('v', 0.967_546_865_551_300),
    ('z', 0.392_226_029_698_313),
    ('x', 0.288_500_302_358_395),
    ('q', 0.182_254_921_722_770),
    ('j', 0.173_856_077_403_749),
];

/// Letter counts and percentage weights over a set of words
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LetterDistribution {
    counts: BTreeMap<char, usize>,
    total: usize,
    percents: BTreeMap<char, f64>,
}

impl LetterDistribution {
    /// Count every letter occurrence in `words`, repeats included
    ///
    /// # Examples
    /// ```
    /// use word_sieve::scoring::LetterDistribution;
    ///
    /// let dist = LetterDistribution::from_words(["abc", "abd", "xyz"]);
    /// assert_eq!(dist.total(), 9);
    /// assert_eq!(dist.count('a'), 2);
    /// assert!((dist.percent('a') - 200.0 / 9.0).abs() < 1e-9);
    /// ```
    pub fn from_words<'w, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'w str>,
    {
        let mut counts: BTreeMap<char, usize> = BTreeMap::new();
        for word in words {
            for letter in word.chars() {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
        let total = counts.values().sum::<usize>();
        let percents = counts
            .iter()
            .map(|(&letter, &count)| (letter, count as f64 / total as f64 * 100.0))
            .collect();

        Self {
            counts,
            total,
            percents,
        }
    }

    /// The fixed reference distribution
    #[must_use]
    pub fn baseline() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
            percents: BASELINE_PERCENT.into_iter().collect(),
        }
    }

    /// Total letter occurrences counted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.percents.is_empty()
    }

    /// Raw occurrence count of `letter`
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Share of all occurrences taken by `letter`, in percent; 0 if unseen
    #[must_use]
    pub fn percent(&self, letter: char) -> f64 {
        self.percents.get(&letter).copied().unwrap_or(0.0)
    }

    /// Letters by descending percentage, ties alphabetical
    #[must_use]
    pub fn ranked(&self) -> Vec<(char, f64)> {
        let mut ranked: Vec<(char, f64)> = self.percents.iter().map(|(&l, &p)| (l, p)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }

    /// Sum of the percentages of the distinct letters in `word`
    #[must_use]
    pub fn score(&self, word: &str) -> f64 {
        word.chars()
            .collect::<BTreeSet<char>>()
            .into_iter()
            .map(|letter| self.percent(letter))
            .sum()
    }
}
