//! Word list loading utilities
//!
//! Corpus files hold one entry per line. Only the first tab-separated field is
//! used, so frequency lists such as `word<TAB>count` load directly.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, instrument};

/// Normalize one corpus entry
///
/// Takes the first tab-separated field, trims and lowercases it, and keeps it
/// only if it is purely ASCII letters and at least `min_length` long.
#[must_use]
pub fn normalize_entry(line: &str, min_length: usize) -> Option<String> {
    let word = line.split('\t').next()?.trim().to_lowercase();

    if word.len() < min_length.max(1) || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }
    Some(word)
}

/// Load words from a file
///
/// Returns the normalized words, skipping entries that are too short or contain
/// anything but ASCII letters.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use boggle_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("TWL06.txt", 4).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
#[instrument(skip(path))]
pub fn load_from_file<P: AsRef<Path>>(path: P, min_length: usize) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path.as_ref())?;

    let mut lines = 0;
    let words: Vec<String> = content
        .lines()
        .inspect(|_| lines += 1)
        .filter_map(|line| normalize_entry(line, min_length))
        .collect();

    info!(
        "loaded {} words from {} ({} lines)",
        words.len(),
        path.as_ref().display(),
        lines
    );
    Ok(words)
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use boggle_solver::wordlists::loader::words_from_slice;
/// use boggle_solver::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS, 4);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], min_length: usize) -> Vec<String> {
    slice
        .iter()
        .filter_map(|&s| normalize_entry(s, min_length))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn normalize_takes_first_field() {
        assert_eq!(
            normalize_entry("Stone\t12345", 4),
            Some("stone".to_string())
        );
        assert_eq!(normalize_entry("  slate  ", 4), Some("slate".to_string()));
    }

    #[test]
    fn normalize_rejects_short_and_invalid() {
        assert_eq!(normalize_entry("cat", 4), None);
        assert_eq!(normalize_entry("don't", 4), None);
        assert_eq!(normalize_entry("café", 4), None);
        assert_eq!(normalize_entry("", 0), None);
        assert_eq!(normalize_entry("\t42", 1), None);
    }

    #[test]
    fn min_length_is_inclusive() {
        assert_eq!(normalize_entry("cat", 3), Some("cat".to_string()));
    }

    #[test]
    fn words_from_slice_filters() {
        let input = &["crane", "abc", "Slate", "x-ray"];
        let words = words_from_slice(input, 4);
        assert_eq!(words, ["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input, 4).is_empty());
    }

    #[test]
    fn load_from_file_reads_corpus() {
        let path = std::env::temp_dir().join(format!(
            "boggle_solver_loader_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "the\t23135851162").unwrap();
            writeln!(file, "stone\t1000").unwrap();
            writeln!(file, "Paste").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "it's\t9").unwrap();
        }

        let words = load_from_file(&path, 4).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, ["stone", "paste"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here.txt", 4).is_err());
    }

    #[test]
    fn embedded_words_survive_default_filter() {
        use crate::wordlists::{DEFAULT_MIN_LENGTH, WORDS};

        let words = words_from_slice(WORDS, DEFAULT_MIN_LENGTH);
        assert_eq!(words.len(), WORDS.len());
    }
}
