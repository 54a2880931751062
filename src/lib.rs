//! Word Sieve
//!
//! Filters a dictionary by positional letter constraints and ranks the
//! survivors by letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use word_sieve::constraints::{ConstraintSet, apply_line};
//! use word_sieve::filter::FilterEngine;
//! use word_sieve::index::Dictionary;
//! use word_sieve::scoring::{FrequencyTable, RankStrategy, rank};
//!
//! let dictionary = Dictionary::from_words(["apple", "apply", "angle", "ample"]);
//!
//! let mut constraints = ConstraintSet::new(5);
//! apply_line("c a 1; i p 2; x n", &mut constraints).unwrap();
//!
//! let words = FilterEngine::new(&dictionary).apply(&constraints);
//! let ranking = rank(&words, &FrequencyTable::new(), RankStrategy::Score);
//! assert_eq!(ranking.entries[0].word, "ample");
//! ```

// Core domain types
pub mod core;

// Length, position and presence indices
pub mod index;

// Constraint state and hint parsing
pub mod constraints;

// Rule compilation and set algebra
pub mod filter;

// Letter distribution and ranking
pub mod scoring;

// Independent query tabs
pub mod session;

// Word lists
pub mod wordlists;

// Resolved command-line settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
