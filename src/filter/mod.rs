//! Constraint filtering
//!
//! Compiles a `ConstraintSet` into primitive set operations and evaluates them
//! against the dictionary indices.

mod engine;
mod rule;

pub use engine::FilterEngine;
pub use rule::{Rule, compile};
