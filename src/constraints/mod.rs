//! Letter constraints
//!
//! `ConstraintSet` accumulates what is known about the hidden word; `hint`
//! parses the short commands users type to grow it.

pub mod hint;
mod set;

pub use hint::{ClearTarget, Hint, HintError, PositionUpdate, apply_line};
pub use set::{ConstraintSet, LetterQuota};
