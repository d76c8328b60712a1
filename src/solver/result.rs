//! Search output: words grouped with the paths that spell them

use crate::core::Path;
use rustc_hash::FxHashMap;

/// Mapping from each word found to every path that traces it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    words: FxHashMap<String, Vec<Path>>,
}

impl SearchResult {
    /// Record one accepted path for `word`
    pub(crate) fn record(&mut self, word: String, path: Path) {
        self.words.entry(word).or_default().push(path);
    }

    /// Paths spelling `word`, if it was found
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&[Path]> {
        self.words.get(word).map(Vec::as_slice)
    }

    /// Whether `word` was found
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of distinct words found
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Total number of paths across all words
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    /// Length of the longest word found (0 when empty)
    #[must_use]
    pub fn longest_word_len(&self) -> usize {
        self.words.keys().map(String::len).max().unwrap_or(0)
    }

    /// Iterate over `(word, paths)` in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Path])> {
        self.words
            .iter()
            .map(|(word, paths)| (word.as_str(), paths.as_slice()))
    }

    /// Words ordered by length, then alphabetically
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{Board, PrefixIndex};
    /// use boggle_solver::solver::find_words;
    ///
    /// let board = Board::from_rows("sal,ete,xxx").unwrap();
    /// let index = PrefixIndex::from_words(["steal", "salt", "tea", "seal", "late", "zebra"]).unwrap();
    /// let result = find_words(&board, &index);
    /// assert_eq!(result.sorted_words(), ["tea", "late", "salt", "seal", "steal"]);
    /// ```
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.keys().map(String::as_str).collect();
        words.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Coordinate};

    fn path_on(board: &Board, coords: &[(usize, usize)]) -> (String, Path) {
        let coords: Vec<Coordinate> = coords.iter().map(|&c| c.into()).collect();
        let path = Path::from_coords(coords);
        (path.word(board), path)
    }

    #[test]
    fn record_groups_paths_by_word() {
        let board = Board::from_rows("aa,aa").unwrap();
        let mut result = SearchResult::default();

        let (w1, p1) = path_on(&board, &[(0, 0), (0, 1)]);
        let (w2, p2) = path_on(&board, &[(0, 1), (0, 0)]);
        result.record(w1, p1);
        result.record(w2, p2);

        assert_eq!(result.len(), 1);
        assert_eq!(result.path_count(), 2);
        assert_eq!(result.get("aa").map(<[Path]>::len), Some(2));
    }

    #[test]
    fn sorted_words_by_length_then_alpha() {
        let board = Board::from_rows("abcd,efgh,ijkl,mnop").unwrap();
        let mut result = SearchResult::default();
        for coords in [
            &[(0, 0), (0, 1), (0, 2)][..],
            &[(1, 0), (1, 1)][..],
            &[(0, 0), (0, 1)][..],
            &[(3, 3), (2, 2), (1, 1), (0, 0)][..],
        ] {
            let (word, path) = path_on(&board, coords);
            result.record(word, path);
        }

        assert_eq!(result.sorted_words(), ["ab", "ef", "abc", "pkfa"]);
        assert_eq!(result.longest_word_len(), 4);
    }

    #[test]
    fn empty_result() {
        let result = SearchResult::default();
        assert!(result.is_empty());
        assert_eq!(result.longest_word_len(), 0);
        assert_eq!(result.path_count(), 0);
        assert!(result.sorted_words().is_empty());
        assert!(result.get("anything").is_none());
    }
}
