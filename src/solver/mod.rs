//! Boggle search engine
//!
//! Joint depth-first traversal of a board and a prefix index.

mod engine;
mod result;

pub use engine::{SearchConfig, Solver, find_words};
pub use result::SearchResult;
