//! Word lists and frequency tables
//!
//! Provides the embedded sample dictionary and loaders for word-list and
//! frequency files.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE, SAMPLE_COUNT};
pub use loader::LoadError;
