//! Core domain types for Boggle
//!
//! This module contains the board, path and prefix index types. They carry no
//! I/O and no randomness; generators and commands build on top of them.

mod board;
mod path;
mod trie;

pub use board::{Board, BoardError, Coordinate};
pub use path::Path;
pub use trie::{NodeId, PrefixIndex, PrefixNode, VocabularyError, Words};
