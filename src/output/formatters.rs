//! Formatting utilities for terminal output

use crate::constraints::ConstraintSet;
use std::collections::BTreeSet;

/// Placeholder for a position with no known letter
const UNKNOWN: char = '_';

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: the ratio is clamped to [0, 1] before scaling
        ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a letter share in percent
#[must_use]
pub fn percent_bar(percent: f64, width: usize) -> String {
    create_progress_bar(percent, 100.0, width)
}

/// Known letters laid out by position, e.g. `a___e`
///
/// When two letters claim the same position the later one in alphabetical
/// order is shown.
#[must_use]
pub fn correct_mask(constraints: &ConstraintSet) -> String {
    let mut mask = vec![UNKNOWN; constraints.size()];
    for (&letter, positions) in constraints.corrects() {
        for &position in positions {
            if let Some(slot) = mask.get_mut(position) {
                *slot = letter;
            }
        }
    }
    mask.into_iter().collect()
}

/// 0-based positions rendered 1-based, e.g. `1,3`
#[must_use]
pub fn position_list(positions: &BTreeSet<usize>) -> String {
    positions
        .iter()
        .map(|p| (p + 1).to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Entries like `a@1,3 b@2`
fn letter_positions<'a>(
    entries: impl IntoIterator<Item = (&'a char, &'a BTreeSet<usize>)>,
) -> String {
    entries
        .into_iter()
        .map(|(letter, positions)| format!("{letter}@{}", position_list(positions)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Single-line summary of a constraint set
///
/// # Examples
/// ```
/// use word_sieve::constraints::ConstraintSet;
/// use word_sieve::output::formatters::format_constraints;
///
/// let mut constraints = ConstraintSet::new(5);
/// constraints.set_correct('a', [0]);
/// constraints.set_include('p', [1]);
/// constraints.toggle_exclude('n');
///
/// assert_eq!(
///     format_constraints(&constraints),
///     "size 5 | correct a@1 | include p@2 | exclude n"
/// );
/// ```
#[must_use]
pub fn format_constraints(constraints: &ConstraintSet) -> String {
    let mut parts = vec![format!("size {}", constraints.size())];
    if !constraints.corrects().is_empty() {
        parts.push(format!("correct {}", letter_positions(constraints.corrects())));
    }
    if !constraints.includes().is_empty() {
        parts.push(format!("include {}", letter_positions(constraints.includes())));
    }
    if !constraints.excludes().is_empty() {
        parts.push(format!(
            "exclude {}",
            constraints.excludes().iter().collect::<String>()
        ));
    }
    if let Some(quota) = constraints.using() {
        parts.push(format!(
            "using {} of {}",
            quota.min_matches,
            quota.letters.iter().collect::<String>()
        ));
    }
    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max_is_empty() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn percent_bar_clamps_overflow() {
        assert_eq!(percent_bar(250.0, 4), "████");
    }

    #[test]
    fn mask_places_letters() {
        let mut constraints = ConstraintSet::new(5);
        constraints.set_correct('a', [0]);
        constraints.set_correct('e', [4]);
        assert_eq!(correct_mask(&constraints), "a___e");
    }

    #[test]
    fn empty_constraints_show_size_only() {
        assert_eq!(format_constraints(&ConstraintSet::new(6)), "size 6");
    }

    #[test]
    fn multiple_positions_are_one_based() {
        let mut constraints = ConstraintSet::new(5);
        constraints.set_include('e', [0, 2]);
        constraints.set_include('s', [4]);
        assert_eq!(format_constraints(&constraints), "size 5 | include e@1,3 s@5");
    }

    #[test]
    fn using_quota_is_summarized() {
        let mut constraints = ConstraintSet::new(5);
        constraints.set_using(['t', 'r', 's'], 2);
        assert_eq!(format_constraints(&constraints), "size 5 | using 2 of rst");
    }
}
