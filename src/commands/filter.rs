//! One-shot filter command
//!
//! Applies a list of hint commands to a fresh constraint set, filters the
//! dictionary, and ranks the survivors.

use crate::constraints::{ConstraintSet, HintError, apply_line};
use crate::filter::FilterEngine;
use crate::index::Dictionary;
use crate::scoring::{FrequencyTable, RankStrategy, Ranking, Scorer};

/// Result of filtering and ranking
pub struct FilterResult<'d> {
    pub constraints: ConstraintSet,
    pub ranking: Ranking<'d>,
    pub strategy: RankStrategy,
}

/// Filter `dictionary` by `hints`, starting from words of `size` letters
///
/// # Errors
///
/// Returns the first `HintError` if any hint fails to parse.
pub fn run_filter<'d, S: AsRef<str>>(
    dictionary: &'d Dictionary,
    size: usize,
    hints: &[S],
    frequencies: &FrequencyTable,
    scorer: &Scorer,
    strategy: RankStrategy,
) -> Result<FilterResult<'d>, HintError> {
    let mut constraints = ConstraintSet::new(size);
    for hint in hints {
        apply_line(hint.as_ref(), &mut constraints)?;
    }

    let words = FilterEngine::new(dictionary).apply(&constraints);
    let ranking = scorer.rank(&words, frequencies, strategy);

    Ok(FilterResult {
        constraints,
        ranking,
        strategy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["apple", "apply", "angle", "ample", "at"])
    }

    #[test]
    fn filters_and_ranks() {
        let dictionary = dictionary();
        let result = run_filter(
            &dictionary,
            5,
            &["c a 1", "i p 2", "x n"],
            &FrequencyTable::new(),
            &Scorer::new(),
            RankStrategy::Score,
        )
        .unwrap();

        assert_eq!(result.ranking.len(), 1);
        assert_eq!(result.ranking.entries[0].word, "ample");
        assert!(result.constraints.is_excluded('n'));
    }

    #[test]
    fn no_hints_ranks_whole_bucket() {
        let dictionary = dictionary();
        let result = run_filter::<&str>(
            &dictionary,
            5,
            &[],
            &FrequencyTable::new(),
            &Scorer::new(),
            RankStrategy::Alphabetical,
        )
        .unwrap();

        let words: Vec<&str> = result.ranking.entries.iter().map(|e| e.word).collect();
        assert_eq!(words, vec!["ample", "angle", "apple", "apply"]);
    }

    #[test]
    fn bad_hint_is_reported() {
        let dictionary = dictionary();
        let result = run_filter(
            &dictionary,
            5,
            &["c a 9"],
            &FrequencyTable::new(),
            &Scorer::new(),
            RankStrategy::Score,
        );
        assert!(result.is_err());
    }
}
