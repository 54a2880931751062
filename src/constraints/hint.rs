//! Textual hint commands
//!
//! Turns short typed commands into `ConstraintSet` mutations. Positions are
//! 1-based in text and 0-based everywhere else.
//!
//! | Command | Effect |
//! |---|---|
//! | `c <letter> <pos>...` | letter is at these positions (`-` clears it) |
//! | `i <letter> <pos>...` | letter is present but not at these positions (`-` clears it) |
//! | `x <letters>` | toggle exclusion of each letter |
//! | `s <text> <pos>` | `text` starts at `pos` |
//! | `f <guess> <pattern>` | Wordle feedback such as `f crane GY--G` |
//! | `u <letters> <n>` | at least `n` of `letters` appear anywhere |
//! | `clear [c\|i\|x\|u\|all]` | bulk clear |
//! | `size <n>` | restart at a new word length |
//!
//! Several commands may be joined with `;`.

use super::ConstraintSet;
use crate::core::{Mark, Pattern};
use std::str::FromStr;

/// Errors produced while parsing a hint
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HintError {
    #[error("empty hint")]
    Empty,
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{0}' is not a single letter")]
    BadLetter(String),
    #[error("'{0}' is not a position")]
    BadPosition(String),
    #[error("position {position} is outside 1..={size}")]
    PositionOutOfRange { position: usize, size: usize },
    #[error("'{0}' is not a word length")]
    BadSize(String),
    #[error("'{0}' is not a match count")]
    BadCount(String),
    #[error("invalid feedback pattern '{0}'")]
    BadPattern(String),
    #[error("guess and pattern must both have {size} letters")]
    LengthMismatch { size: usize },
}

/// Per-letter position update: merge positions, or drop the letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionUpdate {
    Merge(Vec<usize>),
    Clear,
}

/// Bulk-clear target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearTarget {
    Corrects,
    Includes,
    Excludes,
    Using,
    All,
}

impl FromStr for ClearTarget {
    type Err = HintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" | "correct" | "corrects" => Ok(Self::Corrects),
            "i" | "include" | "includes" => Ok(Self::Includes),
            "x" | "exclude" | "excludes" => Ok(Self::Excludes),
            "u" | "using" => Ok(Self::Using),
            "all" | "*" => Ok(Self::All),
            other => Err(HintError::UnknownCommand(format!("clear {other}"))),
        }
    }
}

/// A parsed hint command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    Correct { letter: char, update: PositionUpdate },
    Include { letter: char, update: PositionUpdate },
    Exclude { letters: Vec<char> },
    Substring { text: String, offset: usize },
    Feedback { guess: Vec<char>, pattern: Pattern },
    Using { letters: Vec<char>, min_matches: usize },
    Clear(ClearTarget),
    Size(usize),
}

impl Hint {
    /// Parse one command, validating positions against `size`
    ///
    /// # Errors
    /// Returns a `HintError` describing the first problem found.
    ///
    /// # Examples
    /// ```
    /// use word_sieve::constraints::{Hint, PositionUpdate};
    ///
    /// let hint = Hint::parse("c a 1 3", 5).unwrap();
    /// assert_eq!(
    ///     hint,
    ///     Hint::Correct { letter: 'a', update: PositionUpdate::Merge(vec![0, 2]) }
    /// );
    /// assert!(Hint::parse("c a 6", 5).is_err());
    /// ```
    pub fn parse(input: &str, size: usize) -> Result<Self, HintError> {
        let mut parts = input.split_whitespace();
        let command = parts.next().ok_or(HintError::Empty)?;
        let args: Vec<&str> = parts.collect();

        match command.to_lowercase().as_str() {
            "c" | "correct" => {
                let (letter, update) = parse_letter_positions("c", &args, size)?;
                Ok(Self::Correct { letter, update })
            }
            "i" | "include" => {
                let (letter, update) = parse_letter_positions("i", &args, size)?;
                Ok(Self::Include { letter, update })
            }
            "x" | "exclude" => {
                if args.is_empty() {
                    return Err(HintError::MissingArgument {
                        command: "x",
                        expected: "one or more letters",
                    });
                }
                let letters = args
                    .iter()
                    .flat_map(|arg| arg.chars())
                    .map(normalize_letter)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::Exclude { letters })
            }
            "s" | "substr" => {
                let [text, position] = args[..] else {
                    return Err(HintError::MissingArgument {
                        command: "s",
                        expected: "<text> <position>",
                    });
                };
                let letters = parse_word(text)?;
                let offset = parse_position(position, size)?;
                if offset + letters.len() > size {
                    return Err(HintError::PositionOutOfRange {
                        position: offset + letters.len(),
                        size,
                    });
                }
                Ok(Self::Substring {
                    text: letters.into_iter().collect(),
                    offset,
                })
            }
            "f" | "feedback" => {
                let [guess, pattern] = args[..] else {
                    return Err(HintError::MissingArgument {
                        command: "f",
                        expected: "<guess> <pattern>",
                    });
                };
                let guess = parse_word(guess)?;
                let pattern =
                    Pattern::parse(pattern).ok_or_else(|| HintError::BadPattern(pattern.into()))?;
                if guess.len() != size || pattern.len() != size {
                    return Err(HintError::LengthMismatch { size });
                }
                Ok(Self::Feedback { guess, pattern })
            }
            "u" | "using" => {
                let [letters, count] = args[..] else {
                    return Err(HintError::MissingArgument {
                        command: "u",
                        expected: "<letters> <count>",
                    });
                };
                let letters = parse_word(letters)?;
                let min_matches = count
                    .parse()
                    .map_err(|_| HintError::BadCount(count.to_string()))?;
                Ok(Self::Using {
                    letters,
                    min_matches,
                })
            }
            "clear" => match args.first() {
                None => Ok(Self::Clear(ClearTarget::All)),
                Some(target) => Ok(Self::Clear(target.parse()?)),
            },
            "size" => {
                let raw = args.first().ok_or(HintError::MissingArgument {
                    command: "size",
                    expected: "a word length",
                })?;
                match raw.parse::<usize>() {
                    Ok(n) if n > 0 => Ok(Self::Size(n)),
                    _ => Err(HintError::BadSize((*raw).to_string())),
                }
            }
            other => Err(HintError::UnknownCommand(other.to_string())),
        }
    }

    /// Apply this hint to `constraints`
    pub fn apply(&self, constraints: &mut ConstraintSet) {
        match self {
            Self::Correct { letter, update } => match update {
                PositionUpdate::Merge(positions) => {
                    constraints.set_correct(*letter, positions.iter().copied());
                }
                PositionUpdate::Clear => constraints.clear_correct_letter(*letter),
            },
            Self::Include { letter, update } => match update {
                PositionUpdate::Merge(positions) => {
                    constraints.set_include(*letter, positions.iter().copied());
                }
                PositionUpdate::Clear => constraints.clear_include_letter(*letter),
            },
            Self::Exclude { letters } => {
                for &letter in letters {
                    constraints.toggle_exclude(letter);
                }
            }
            Self::Substring { text, offset } => constraints.set_substring(*offset, text),
            Self::Feedback { guess, pattern } => apply_feedback(constraints, guess, pattern),
            Self::Using {
                letters,
                min_matches,
            } => constraints.set_using(letters.iter().copied(), *min_matches),
            Self::Clear(target) => match target {
                ClearTarget::Corrects => constraints.clear_corrects(),
                ClearTarget::Includes => constraints.clear_includes(),
                ClearTarget::Excludes => constraints.clear_excludes(),
                ClearTarget::Using => constraints.clear_using(),
                ClearTarget::All => constraints.clear_all(),
            },
            Self::Size(size) => constraints.set_size(*size),
        }
    }
}

/// Parse and apply every `;`-separated command in `line`
///
/// Commands are validated against the length in effect when they run, so
/// `size 6; c a 6` is accepted. Nothing is applied unless every command parses.
///
/// # Errors
/// Returns the first `HintError`; `constraints` is left untouched in that case.
pub fn apply_line(line: &str, constraints: &mut ConstraintSet) -> Result<usize, HintError> {
    let mut staged = constraints.clone();
    let mut applied = 0;

    for command in line.split(';').map(str::trim).filter(|c| !c.is_empty()) {
        Hint::parse(command, staged.size())?.apply(&mut staged);
        applied += 1;
    }
    if applied == 0 {
        return Err(HintError::Empty);
    }

    *constraints = staged;
    Ok(applied)
}

/// Record one guess's feedback
///
/// A gray letter that is green or yellow elsewhere in the same guess is a
/// repeated letter: it is present, just not at this position. Gray exclusions
/// only ever add, so replaying feedback cannot lift an exclusion.
fn apply_feedback(constraints: &mut ConstraintSet, guess: &[char], pattern: &Pattern) {
    let present: Vec<char> = guess
        .iter()
        .zip(pattern.marks())
        .filter(|&(_, &mark)| mark != Mark::Gray)
        .map(|(&letter, _)| letter)
        .collect();

    for (position, (&letter, &mark)) in guess.iter().zip(pattern.marks()).enumerate() {
        match mark {
            Mark::Green => constraints.set_correct(letter, [position]),
            Mark::Yellow => constraints.set_include(letter, [position]),
            Mark::Gray if present.contains(&letter) => constraints.set_include(letter, [position]),
            Mark::Gray => {
                if !constraints.is_excluded(letter) {
                    constraints.toggle_exclude(letter);
                }
            }
        }
    }
}

fn parse_letter_positions(
    command: &'static str,
    args: &[&str],
    size: usize,
) -> Result<(char, PositionUpdate), HintError> {
    let Some((letter, rest)) = args.split_first() else {
        return Err(HintError::MissingArgument {
            command,
            expected: "<letter> <position>... or <letter> -",
        });
    };
    let letter = parse_single_letter(letter)?;

    if rest == ["-"] {
        return Ok((letter, PositionUpdate::Clear));
    }
    if rest.is_empty() {
        return Err(HintError::MissingArgument {
            command,
            expected: "at least one position, or '-' to clear",
        });
    }

    let positions = rest
        .iter()
        .map(|raw| parse_position(raw, size))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((letter, PositionUpdate::Merge(positions)))
}

fn parse_single_letter(raw: &str) -> Result<char, HintError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => normalize_letter(ch),
        _ => Err(HintError::BadLetter(raw.to_string())),
    }
}

fn parse_word(raw: &str) -> Result<Vec<char>, HintError> {
    raw.chars().map(normalize_letter).collect()
}

fn normalize_letter(ch: char) -> Result<char, HintError> {
    if !ch.is_alphabetic() {
        return Err(HintError::BadLetter(ch.to_string()));
    }
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => Ok(single),
        _ => Ok(ch),
    }
}

/// 1-based text position → 0-based index within `size`
fn parse_position(raw: &str, size: usize) -> Result<usize, HintError> {
    let position: usize = raw
        .parse()
        .map_err(|_| HintError::BadPosition(raw.to_string()))?;
    if position == 0 || position > size {
        return Err(HintError::PositionOutOfRange { position, size });
    }
    Ok(position - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn positions(raw: &[usize]) -> BTreeSet<usize> {
        raw.iter().copied().collect()
    }

    #[test]
    fn parse_correct_and_include() {
        assert_eq!(
            Hint::parse("i p 2", 5).unwrap(),
            Hint::Include {
                letter: 'p',
                update: PositionUpdate::Merge(vec![1])
            }
        );
        assert_eq!(
            Hint::parse("C A -", 5).unwrap(),
            Hint::Correct {
                letter: 'a',
                update: PositionUpdate::Clear
            }
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Hint::parse("", 5), Err(HintError::Empty));
        assert!(matches!(
            Hint::parse("q a", 5),
            Err(HintError::UnknownCommand(_))
        ));
        assert!(matches!(
            Hint::parse("c ab 1", 5),
            Err(HintError::BadLetter(_))
        ));
        assert!(matches!(
            Hint::parse("c 1 1", 5),
            Err(HintError::BadLetter(_))
        ));
        assert!(matches!(
            Hint::parse("c a one", 5),
            Err(HintError::BadPosition(_))
        ));
        assert_eq!(
            Hint::parse("c a 0", 5),
            Err(HintError::PositionOutOfRange {
                position: 0,
                size: 5
            })
        );
        assert!(matches!(
            Hint::parse("c a", 5),
            Err(HintError::MissingArgument { .. })
        ));
        assert!(matches!(Hint::parse("size 0", 5), Err(HintError::BadSize(_))));
    }

    #[test]
    fn exclude_accepts_grouped_letters() {
        assert_eq!(
            Hint::parse("x nr t", 5).unwrap(),
            Hint::Exclude {
                letters: vec!['n', 'r', 't']
            }
        );
    }

    #[test]
    fn substring_must_fit() {
        assert_eq!(
            Hint::parse("s ple 3", 5).unwrap(),
            Hint::Substring {
                text: "ple".into(),
                offset: 2
            }
        );
        assert!(Hint::parse("s ple 4", 5).is_err());
    }

    #[test]
    fn feedback_length_must_match() {
        assert_eq!(
            Hint::parse("f crane GY-", 5),
            Err(HintError::LengthMismatch { size: 5 })
        );
        assert!(matches!(
            Hint::parse("f crane GYQ--", 5),
            Err(HintError::BadPattern(_))
        ));
    }

    #[test]
    fn feedback_builds_constraints() {
        let mut constraints = ConstraintSet::new(5);
        apply_line("f crane -Y-G-", &mut constraints).unwrap();

        assert_eq!(constraints.corrects()[&'n'], positions(&[3]));
        assert_eq!(constraints.includes()[&'r'], positions(&[1]));
        let excluded: Vec<char> = constraints.excludes().iter().copied().collect();
        assert_eq!(excluded, vec!['a', 'c', 'e']);
    }

    #[test]
    fn feedback_gray_repeat_becomes_include() {
        let mut constraints = ConstraintSet::new(5);
        apply_line("f speed --G--", &mut constraints).unwrap();

        assert_eq!(constraints.corrects()[&'e'], positions(&[2]));
        assert_eq!(constraints.includes()[&'e'], positions(&[3]));
        assert!(!constraints.is_excluded('e'));
    }

    #[test]
    fn replayed_feedback_keeps_exclusions() {
        let mut constraints = ConstraintSet::new(5);
        apply_line("f crane -----", &mut constraints).unwrap();
        apply_line("f crane -----", &mut constraints).unwrap();
        assert_eq!(constraints.excludes().len(), 5);
    }

    #[test]
    fn apply_line_is_all_or_nothing() {
        let mut constraints = ConstraintSet::new(5);
        let err = apply_line("c a 1; c b 9", &mut constraints).unwrap_err();

        assert!(matches!(err, HintError::PositionOutOfRange { .. }));
        assert!(constraints.is_empty());
    }

    #[test]
    fn apply_line_uses_current_size() {
        let mut constraints = ConstraintSet::new(5);
        let applied = apply_line("size 6; c a 6", &mut constraints).unwrap();

        assert_eq!(applied, 2);
        assert_eq!(constraints.size(), 6);
        assert_eq!(constraints.corrects()[&'a'], positions(&[5]));
    }

    #[test]
    fn clear_targets() {
        let mut constraints = ConstraintSet::new(5);
        apply_line("c a 1; i b 2; x c", &mut constraints).unwrap();

        apply_line("clear x", &mut constraints).unwrap();
        assert!(constraints.excludes().is_empty());
        assert!(!constraints.corrects().is_empty());

        apply_line("clear", &mut constraints).unwrap();
        assert!(constraints.is_empty());
        assert_eq!(constraints.size(), 5);
    }

    #[test]
    fn using_quota_parses_and_applies() {
        assert_eq!(
            Hint::parse("u RST 2", 5).unwrap(),
            Hint::Using {
                letters: vec!['r', 's', 't'],
                min_matches: 2
            }
        );
        assert!(matches!(
            Hint::parse("u rst many", 5),
            Err(HintError::BadCount(_))
        ));
        assert!(matches!(
            Hint::parse("u rst", 5),
            Err(HintError::MissingArgument { .. })
        ));

        let mut constraints = ConstraintSet::new(5);
        apply_line("u rst 2", &mut constraints).unwrap();
        let quota = constraints.using().unwrap();
        assert_eq!(quota.min_matches, 2);
        assert!(quota.letters.contains(&'s'));

        apply_line("clear u", &mut constraints).unwrap();
        assert!(constraints.is_empty());
    }

    #[test]
    fn non_ascii_letters_are_accepted() {
        assert_eq!(
            Hint::parse("c Ż 1", 4).unwrap(),
            Hint::Correct {
                letter: 'ż',
                update: PositionUpdate::Merge(vec![0])
            }
        );
    }
}
