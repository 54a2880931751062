//! Dictionary statistics command

use crate::index::Dictionary;
use crate::scoring::LetterDistribution;

/// Word counts per length plus the letter distribution of one length
pub struct DictionaryStats {
    pub total_words: usize,
    pub by_length: Vec<(usize, usize)>,
    pub size: usize,
    pub distribution: LetterDistribution,
}

/// Summarize `dictionary`, with the letter distribution for `size`-letter words
#[must_use]
pub fn dictionary_stats(dictionary: &Dictionary, size: usize) -> DictionaryStats {
    DictionaryStats {
        total_words: dictionary.len(),
        by_length: dictionary.length_counts(),
        size,
        distribution: LetterDistribution::from_words(dictionary.words_of_length(size)),
    }
}
