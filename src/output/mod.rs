//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_constraints, print_distribution, print_filter_result, print_ranking,
    print_snapshot_summary, print_stats,
};
