//! External word-frequency weights

use rustc_hash::FxHashMap;

/// Read-only word → weight lookup supplied by the caller
///
/// Words without an entry weigh 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    weights: FxHashMap<String, f64>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: impl Into<String>, weight: f64) {
        self.weights.insert(word.into(), weight);
    }

    #[must_use]
    pub fn get(&self, word: &str) -> f64 {
        self.weights.get(word).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().map(|(w, f)| (w.into(), f)).collect(),
        }
    }
}
