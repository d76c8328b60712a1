//! Formatting utilities for terminal output

use crate::core::{Board, Path};
use crate::solver::SearchResult;

/// Board rows in upper case, letters separated by spaces
#[must_use]
pub fn board_lines(board: &Board) -> Vec<String> {
    board
        .rows()
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| c.to_ascii_uppercase().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Comma-separated list of paths, e.g. `0:0-0:1, 1:1-0:1`
#[must_use]
pub fn path_list(paths: &[Path]) -> String {
    paths
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summary line for a search result
#[must_use]
pub fn solution_header(result: &SearchResult) -> String {
    format!(
        "{} words found (max length: {})",
        result.len(),
        result.longest_word_len()
    )
}

/// Numbered `j: word (paths)` lines, shortest words first
#[must_use]
pub fn solution_lines(result: &SearchResult) -> Vec<String> {
    result
        .sorted_words()
        .into_iter()
        .enumerate()
        .map(|(j, word)| {
            let paths = result.get(word).unwrap_or_default();
            format!("{}: {word} ({})", j + 1, path_list(paths))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
