//! Word lists for Boggle solving
//!
//! Provides an embedded default vocabulary and loaders for external corpora.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

/// Shortest word accepted from a corpus by default
pub const DEFAULT_MIN_LENGTH: usize = 4;
