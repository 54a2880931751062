//! Candidate ranking
//!
//! Scores each surviving word against the pool's letter distribution, attaches
//! its external frequency weight, and orders the result by the chosen strategy.

use super::{FrequencyTable, LetterDistribution};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort order for a ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankStrategy {
    /// Ascending by word
    Alphabetical,
    /// Descending by letter-frequency score
    #[default]
    Score,
    /// Descending by external frequency weight
    Frequency,
}

impl RankStrategy {
    /// Strategy from its numeric code: 0 alphabetical, 1 score, 2 frequency
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Alphabetical),
            1 => Some(Self::Score),
            2 => Some(Self::Frequency),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Alphabetical => 0,
            Self::Score => 1,
            Self::Frequency => 2,
        }
    }

    /// Next strategy in display order, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Alphabetical => Self::Score,
            Self::Score => Self::Frequency,
            Self::Frequency => Self::Alphabetical,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alphabetical => "alpha",
            Self::Score => "score",
            Self::Frequency => "freq",
        }
    }

    fn compare(self, a: &RankedWord<'_>, b: &RankedWord<'_>) -> Ordering {
        let by_word = || a.word.cmp(b.word);
        let by_score = || b.score.total_cmp(&a.score);
        let by_frequency = || b.frequency.total_cmp(&a.frequency);

        match self {
            Self::Alphabetical => by_word().then_with(by_score).then_with(by_frequency),
            Self::Score => by_score().then_with(by_word).then_with(by_frequency),
            Self::Frequency => by_frequency().then_with(by_score).then_with(by_word),
        }
    }
}

impl FromStr for RankStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alpha" | "alphabetical" | "word" | "0" => Ok(Self::Alphabetical),
            "score" | "info" | "1" => Ok(Self::Score),
            "freq" | "frequency" | "2" => Ok(Self::Frequency),
            other => Err(format!("unknown sort order '{other}' (use alpha, score or freq)")),
        }
    }
}

impl fmt::Display for RankStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scored candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedWord<'a> {
    pub word: &'a str,
    pub score: f64,
    pub frequency: f64,
}

/// Ordered candidates plus the distribution they were scored against
#[derive(Debug, Clone, Default)]
pub struct Ranking<'a> {
    pub entries: Vec<RankedWord<'a>>,
    /// Letter distribution of the candidate pool
    pub distribution: LetterDistribution,
    /// True when scores came from the baseline distribution instead
    pub used_baseline: bool,
}

impl<'a> Ranking<'a> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows `[offset, offset + limit)`, clamped to the ranking
    #[must_use]
    pub fn page(&self, offset: usize, limit: usize) -> &[RankedWord<'a>] {
        let start = offset.min(self.entries.len());
        let end = start.saturating_add(limit).min(self.entries.len());
        &self.entries[start..end]
    }
}

/// Ranking configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scorer {
    /// Pools smaller than this are scored with the baseline distribution; 0 disables
    pub baseline_threshold: usize,
}

impl Scorer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            baseline_threshold: 0,
        }
    }

    #[must_use]
    pub const fn with_baseline_threshold(mut self, threshold: usize) -> Self {
        self.baseline_threshold = threshold;
        self
    }

    /// Score and order `words`
    #[must_use]
    pub fn rank<'a>(
        &self,
        words: &[&'a str],
        frequencies: &FrequencyTable,
        strategy: RankStrategy,
    ) -> Ranking<'a> {
        let distribution = LetterDistribution::from_words(words.iter().copied());
        let used_baseline = !words.is_empty() && words.len() < self.baseline_threshold;
        let baseline;
        let weights = if used_baseline {
            baseline = LetterDistribution::baseline();
            &baseline
        } else {
            &distribution
        };

        let mut entries: Vec<RankedWord<'a>> = words
            .par_iter()
            .map(|&word| RankedWord {
                word,
                score: weights.score(word),
                frequency: frequencies.get(word),
            })
            .collect();
        entries.par_sort_by(|a, b| strategy.compare(a, b));

        Ranking {
            entries,
            distribution,
            used_baseline,
        }
    }
}

/// Rank `words` against their own letter distribution
///
/// # Examples
/// ```
/// use word_sieve::scoring::{FrequencyTable, RankStrategy, rank};
///
/// let ranking = rank(&["abc", "abd", "xyz"], &FrequencyTable::new(), RankStrategy::Score);
/// let order: Vec<&str> = ranking.entries.iter().map(|e| e.word).collect();
/// assert_eq!(order, vec!["abc", "abd", "xyz"]);
/// ```
#[must_use]
pub fn rank<'a>(
    words: &[&'a str],
    frequencies: &FrequencyTable,
    strategy: RankStrategy,
) -> Ranking<'a> {
    Scorer::new().rank(words, frequencies, strategy)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn order<'a>(ranking: &Ranking<'a>) -> Vec<&'a str> {
        ranking.entries.iter().map(|e| e.word).collect()
    }

    #[test]
    fn score_strategy_scenario() {
        let ranking = rank(
            &["xyz", "abd", "abc"],
            &FrequencyTable::new(),
            RankStrategy::Score,
        );

        let dist = &ranking.distribution;
        assert_eq!(dist.total(), 9);
        let expected_abc = dist.percent('a') + dist.percent('b') + dist.percent('c');
        assert!((ranking.entries[0].score - expected_abc).abs() < EPSILON);
        assert!((expected_abc - 500.0 / 9.0).abs() < 1e-6);

        // abc and abd tie on score; the tie breaks alphabetically
        assert_eq!(order(&ranking), vec!["abc", "abd", "xyz"]);
        assert!((ranking.entries[2].score - 300.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn alphabetical_strategy() {
        let ranking = rank(
            &["pear", "apple", "fig"],
            &FrequencyTable::new(),
            RankStrategy::Alphabetical,
        );
        assert_eq!(order(&ranking), vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn frequency_strategy_uses_table() {
        let table: FrequencyTable = [("crane", 10.0), ("slate", 50.0)].into_iter().collect();
        let ranking = rank(&["crane", "slate", "irate"], &table, RankStrategy::Frequency);

        assert_eq!(ranking.entries[0].word, "slate");
        assert_eq!(ranking.entries[1].word, "crane");
        assert!(ranking.entries[2].frequency.abs() < EPSILON);
    }

    #[test]
    fn identical_input_ranks_identically() {
        let words = ["stare", "tears", "rates", "aster", "crane"];
        let table = FrequencyTable::new();
        let first = rank(&words, &table, RankStrategy::Score);
        let second = rank(&words, &table, RankStrategy::Score);
        assert_eq!(first.entries, second.entries);
        assert_eq!(order(&first), vec!["aster", "rates", "stare", "tears", "crane"]);
    }

    #[test]
    fn empty_pool_ranks_empty() {
        let ranking = rank(&[], &FrequencyTable::new(), RankStrategy::Score);
        assert!(ranking.is_empty());
        assert!(ranking.distribution.is_empty());
        assert!(!ranking.used_baseline);
    }

    #[test]
    fn baseline_applies_below_threshold() {
        let scorer = Scorer::new().with_baseline_threshold(3);
        let ranking = scorer.rank(&["zzz", "eee"], &FrequencyTable::new(), RankStrategy::Score);

        assert!(ranking.used_baseline);
        assert_eq!(ranking.entries[0].word, "eee");
        let baseline = LetterDistribution::baseline();
        assert!((ranking.entries[0].score - baseline.percent('e')).abs() < EPSILON);
        // the reported distribution is still the pool's own
        assert_eq!(ranking.distribution.count('z'), 3);
    }

    #[test]
    fn baseline_not_applied_at_threshold() {
        let scorer = Scorer::new().with_baseline_threshold(2);
        let ranking = scorer.rank(&["zzz", "eee"], &FrequencyTable::new(), RankStrategy::Score);
        assert!(!ranking.used_baseline);
    }

    #[test]
    fn page_clamps() {
        let ranking = rank(&["a", "b", "c"], &FrequencyTable::new(), RankStrategy::Alphabetical);
        assert_eq!(ranking.page(1, 5).len(), 2);
        assert!(ranking.page(10, 5).is_empty());
        assert_eq!(ranking.page(0, 2)[1].word, "b");
    }

    #[test]
    fn strategy_codes_and_names() {
        for code in 0..3 {
            let strategy = RankStrategy::from_code(code).unwrap();
            assert_eq!(strategy.code(), code);
            assert_eq!(strategy.name().parse::<RankStrategy>().unwrap(), strategy);
        }
        assert!(RankStrategy::from_code(3).is_none());
        assert_eq!(RankStrategy::Frequency.next(), RankStrategy::Alphabetical);
        assert!("bogus".parse::<RankStrategy>().is_err());
    }
}
