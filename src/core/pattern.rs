//! Wordle feedback pattern representation
//!
//! A pattern is the colored feedback for one guess, one mark per letter:
//! - Gray (letter not in word)
//! - Yellow (letter in word, wrong position)
//! - Green (letter in correct position)
//!
//! Unlike the classic game, patterns here may have any length so they can
//! describe guesses against dictionaries of any word length.

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Gray,
    Yellow,
    Green,
}

impl Mark {
    /// Parse one mark from its textual or emoji form
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/'.'/⬜/⬛ for gray
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Gray),
            _ => None,
        }
    }
}

/// Feedback pattern for a guess of arbitrary length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Mark>);

impl Pattern {
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a parsed pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use word_sieve::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1.len(), 5);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        s.chars().map(Mark::from_char).collect::<Option<Vec<_>>>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_mixed_forms() {
        let p1 = Pattern::parse("GYG--").unwrap();
        let p2 = Pattern::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::parse("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(
            p1.marks(),
            &[Mark::Green, Mark::Yellow, Mark::Green, Mark::Gray, Mark::Gray]
        );
    }

    #[test]
    fn parse_any_length() {
        assert_eq!(Pattern::parse("GY").unwrap().len(), 2);
        assert_eq!(Pattern::parse("GY-GY-G").unwrap().len(), 7);
    }

    #[test]
    fn parse_invalid() {
        assert!(Pattern::parse("GXGGY").is_none()); // Invalid char
        assert!(Pattern::parse("").is_none()); // Empty
        assert!(!Pattern::parse(".").unwrap().is_empty());
    }
}
