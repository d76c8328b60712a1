//! Boggle Solver
//!
//! Finds every vocabulary word that can be traced on a Boggle board, walking
//! the board and a prefix index together so that dead prefixes are pruned.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_solver::core::{Board, PrefixIndex};
//! use boggle_solver::solver::find_words;
//!
//! let index = PrefixIndex::from_words(["past", "paste", "patch"]).unwrap();
//! let board = Board::from_rows("pas,tch,exy").unwrap();
//!
//! let result = find_words(&board, &index);
//! assert!(result.contains("patch"));
//! assert!(!result.contains("past"));
//! ```

// Core domain types
pub mod core;

// Path search
pub mod solver;

// Board generators
pub mod generators;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
