//! Core domain types
//!
//! Word identifiers, the word store, and feedback patterns. Everything here is
//! pure and free of I/O.

mod pattern;
mod word;

pub use pattern::{Mark, Pattern};
pub use word::{WordId, WordStore, letter_count};
