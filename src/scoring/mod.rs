//! Candidate scoring and ranking
//!
//! Letter-frequency scores over the surviving pool, optional external word
//! frequencies, and the sort strategies that order them.

mod distribution;
mod frequency;
mod ranker;

pub use distribution::LetterDistribution;
pub use frequency::FrequencyTable;
pub use ranker::{RankStrategy, RankedWord, Ranking, Scorer, rank};
