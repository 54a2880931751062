//! Constraint → set-operation compilation
//!
//! Every constraint becomes one primitive operation against a fixed index entry.
//! Intersection and difference with fixed sets commute, so the compiled list may
//! be applied in any order.

use crate::constraints::ConstraintSet;
use std::fmt;

/// One primitive set operation against the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Keep words with `letter` at `position`
    Intersect { letter: char, position: usize },
    /// Drop words with `letter` at `position`
    Subtract { letter: char, position: usize },
    /// Keep words containing `letter` anywhere
    IntersectPresence { letter: char },
}

impl Rule {
    #[must_use]
    pub const fn is_intersection(self) -> bool {
        !matches!(self, Self::Subtract { .. })
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intersect { letter, position } => write!(f, "∩ {letter}@{position}"),
            Self::Subtract { letter, position } => write!(f, "− {letter}@{position}"),
            Self::IntersectPresence { letter } => write!(f, "∩ {letter}@*"),
        }
    }
}

/// Compile `constraints` into primitive rules
///
/// 1. every correct `(letter, position)` → `Intersect`
/// 2. every include letter → `IntersectPresence`
/// 3. every excluded letter × every position not pinned by a correct letter → `Subtract`
/// 4. every include `(letter, wrong position)` → `Subtract`
///
/// # Examples
/// ```
/// use word_sieve::constraints::ConstraintSet;
/// use word_sieve::filter::{Rule, compile};
///
/// let mut constraints = ConstraintSet::new(3);
/// constraints.set_correct('a', [0]);
/// constraints.toggle_exclude('z');
///
/// assert_eq!(
///     compile(&constraints),
///     vec![
///         Rule::Intersect { letter: 'a', position: 0 },
///         Rule::Subtract { letter: 'z', position: 1 },
///         Rule::Subtract { letter: 'z', position: 2 },
///     ]
/// );
/// ```
#[must_use]
pub fn compile(constraints: &ConstraintSet) -> Vec<Rule> {
    let mut rules = Vec::new();

    for (&letter, positions) in constraints.corrects() {
        rules.extend(
            positions
                .iter()
                .map(|&position| Rule::Intersect { letter, position }),
        );
    }

    rules.extend(
        constraints
            .includes()
            .keys()
            .map(|&letter| Rule::IntersectPresence { letter }),
    );

    let locked = constraints.locked_positions();
    for &letter in constraints.excludes() {
        rules.extend(
            (0..constraints.size())
                .filter(|position| !locked.contains(position))
                .map(|position| Rule::Subtract { letter, position }),
        );
    }

    for (&letter, positions) in constraints.includes() {
        rules.extend(
            positions
                .iter()
                .map(|&position| Rule::Subtract { letter, position }),
        );
    }

    rules
}
