//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_comparison, print_puzzles, print_solution, print_solve_result,
    print_stats_result, print_tree, print_words,
};
