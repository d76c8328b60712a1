//! Boggle board representation
//!
//! A Board is an N×N grid of lowercase letters together with the precomputed
//! 8-neighbour adjacency of every cell.

use std::fmt;

/// A cell position on the board (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Error type for invalid boards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Grid dimension was zero
    EmptyGrid,
    /// Number of letters does not match size × size
    CellCount { expected: usize, actual: usize },
    /// Rows do not form a square
    NotSquare { row: usize, len: usize, size: usize },
    /// Cell is not an ASCII letter
    InvalidLetter(char),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "Board size must be at least 1"),
            Self::CellCount { expected, actual } => {
                write!(f, "Board needs {expected} letters, got {actual}")
            }
            Self::NotSquare { row, len, size } => {
                write!(f, "Row {row} has {len} letters, expected {size}")
            }
            Self::InvalidLetter(ch) => write!(f, "Board cell '{ch}' is not an ASCII letter"),
        }
    }
}

impl std::error::Error for BoardError {}

/// An N×N letter grid with precomputed adjacency
///
/// Cells are stored row-major. Neighbour lists are sorted row-major as well,
/// which fixes the order in which the search explores them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<u8>,
    squares: Vec<Coordinate>,
    neighbors: Vec<Vec<Coordinate>>,
}

impl Board {
    /// Build a board by calling `supplier` once per cell, row-major
    ///
    /// # Errors
    /// Returns `BoardError::EmptyGrid` if `size` is zero, or
    /// `BoardError::InvalidLetter` if the supplier yields a non-letter.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::{Board, Coordinate};
    ///
    /// let mut letters = b"abcd".iter().copied();
    /// let board = Board::build(2, || letters.next().unwrap_or(b'a')).unwrap();
    /// assert_eq!(board.letter_at(Coordinate::new(1, 0)), b'c');
    /// assert_eq!(board.neighbors(Coordinate::new(0, 0)).len(), 3);
    /// ```
    pub fn build<F>(size: usize, mut supplier: F) -> Result<Self, BoardError>
    where
        F: FnMut() -> u8,
    {
        if size == 0 {
            return Err(BoardError::EmptyGrid);
        }
        let letters = (0..size * size).map(|_| supplier()).collect();
        Self::from_letters(size, letters)
    }

    /// Build a board from row-major letters
    ///
    /// Letters are lowercased.
    ///
    /// # Errors
    /// Returns `BoardError` if `size` is zero, the letter count is not
    /// `size * size`, or a cell is not an ASCII letter.
    pub fn from_letters(size: usize, mut letters: Vec<u8>) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::EmptyGrid);
        }
        if letters.len() != size * size {
            return Err(BoardError::CellCount {
                expected: size * size,
                actual: letters.len(),
            });
        }
        if let Some(&bad) = letters.iter().find(|b| !b.is_ascii_alphabetic()) {
            return Err(BoardError::InvalidLetter(char::from(bad)));
        }
        letters.make_ascii_lowercase();

        let squares: Vec<Coordinate> = (0..size)
            .flat_map(|row| (0..size).map(move |col| Coordinate::new(row, col)))
            .collect();
        let neighbors = squares
            .iter()
            .map(|&coord| compute_neighbors(size, coord))
            .collect();

        Ok(Self {
            size,
            cells: letters,
            squares,
            neighbors,
        })
    }

    /// Parse a board from rows such as `"pas,tch,exy"` or `"pas/tch/exy"`
    ///
    /// Whitespace inside rows is ignored.
    ///
    /// # Errors
    /// Returns `BoardError` if the rows do not form a non-empty square of
    /// ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::core::Board;
    ///
    /// let board = Board::from_rows("pas,tch,exy").unwrap();
    /// assert_eq!(board.size(), 3);
    /// assert_eq!(board.to_string(), "p a s\nt c h\ne x y");
    ///
    /// assert!(Board::from_rows("ab,c").is_err());
    /// ```
    pub fn from_rows(text: &str) -> Result<Self, BoardError> {
        let rows: Vec<Vec<char>> = text
            .split([',', '/', '\n'])
            .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let size = rows.len();
        if size == 0 {
            return Err(BoardError::EmptyGrid);
        }

        let mut letters = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(BoardError::NotSquare {
                    row: i,
                    len: row.len(),
                    size,
                });
            }
            for &ch in row {
                if !ch.is_ascii_alphabetic() {
                    return Err(BoardError::InvalidLetter(ch));
                }
                letters.push(ch as u8);
            }
        }

        Self::from_letters(size, letters)
    }

    /// Grid dimension N
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (N²)
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All coordinates in row-major order
    #[inline]
    #[must_use]
    pub fn squares(&self) -> &[Coordinate] {
        &self.squares
    }

    /// Row-major cell index of `coord`
    #[inline]
    #[must_use]
    pub const fn index_of(&self, coord: Coordinate) -> usize {
        coord.row * self.size + coord.col
    }

    /// Letter at `coord`
    ///
    /// # Panics
    /// Panics if `coord` lies outside the board.
    #[inline]
    #[must_use]
    pub fn letter_at(&self, coord: Coordinate) -> u8 {
        assert!(
            coord.row < self.size && coord.col < self.size,
            "coordinate {coord} outside {0}x{0} board",
            self.size
        );
        self.cells[self.index_of(coord)]
    }

    /// Precomputed neighbours of `coord`
    ///
    /// # Panics
    /// Panics if `coord` lies outside the board.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, coord: Coordinate) -> &[Coordinate] {
        assert!(
            coord.row < self.size && coord.col < self.size,
            "coordinate {coord} outside {0}x{0} board",
            self.size
        );
        &self.neighbors[self.index_of(coord)]
    }

    /// Rows of letters as strings
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| String::from_utf8_lossy(row).into_owned())
            .collect()
    }

    /// Spell out the letters along `coords`
    #[must_use]
    pub fn spell(&self, coords: &[Coordinate]) -> String {
        coords.iter().map(|&c| char::from(self.letter_at(c))).collect()
    }
}

/// All cells within one step of `coord`, clamped to the grid, excluding itself
fn compute_neighbors(size: usize, coord: Coordinate) -> Vec<Coordinate> {
    let rows = coord.row.saturating_sub(1)..=(coord.row + 1).min(size - 1);
    rows.flat_map(|row| {
        let cols = coord.col.saturating_sub(1)..=(coord.col + 1).min(size - 1);
        cols.map(move |col| Coordinate::new(row, col))
    })
    .filter(|&c| c != coord)
    .collect()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &letter) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", char::from(letter))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn build_fills_row_major() {
        let mut next = b'a';
        let board = Board::build(3, || {
            let letter = next;
            next += 1;
            letter
        })
        .unwrap();

        assert_eq!(board.rows(), ["abc", "def", "ghi"]);
        assert_eq!(board.letter_at(Coordinate::new(0, 2)), b'c');
        assert_eq!(board.letter_at(Coordinate::new(2, 0)), b'g');
    }

    #[test]
    fn build_calls_supplier_once_per_cell() {
        let mut calls = 0;
        let board = Board::build(4, || {
            calls += 1;
            b'e'
        })
        .unwrap();
        assert_eq!(calls, 16);
        assert_eq!(board.cell_count(), 16);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(Board::build(0, || b'a'), Err(BoardError::EmptyGrid));
        assert_eq!(Board::from_letters(0, vec![]), Err(BoardError::EmptyGrid));
        assert_eq!(Board::from_rows(""), Err(BoardError::EmptyGrid));
    }

    #[test]
    fn from_letters_checks_count_and_letters() {
        assert_eq!(
            Board::from_letters(2, b"abc".to_vec()),
            Err(BoardError::CellCount {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            Board::from_letters(2, b"ab1d".to_vec()),
            Err(BoardError::InvalidLetter('1'))
        );
    }

    #[test]
    fn from_rows_parses_and_lowercases() {
        let board = Board::from_rows("PAS / tch / eXy").unwrap();
        assert_eq!(board.rows(), ["pas", "tch", "exy"]);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        assert_eq!(
            Board::from_rows("abc,de,fgh"),
            Err(BoardError::NotSquare {
                row: 1,
                len: 2,
                size: 3
            })
        );
    }

    #[test]
    fn corner_edge_and_center_neighbor_counts() {
        let board = Board::build(4, || b'a').unwrap();
        assert_eq!(board.neighbors(Coordinate::new(0, 0)).len(), 3);
        assert_eq!(board.neighbors(Coordinate::new(0, 2)).len(), 5);
        assert_eq!(board.neighbors(Coordinate::new(1, 1)).len(), 8);
        assert_eq!(board.neighbors(Coordinate::new(3, 3)).len(), 3);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        let board = Board::build(1, || b'x').unwrap();
        assert!(board.neighbors(Coordinate::new(0, 0)).is_empty());
    }

    #[test]
    fn neighbors_are_sorted_row_major() {
        let board = Board::build(3, || b'a').unwrap();
        let center = board.neighbors(Coordinate::new(1, 1));
        let mut sorted = center.to_vec();
        sorted.sort();
        assert_eq!(center, sorted.as_slice());
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn letter_at_out_of_bounds_panics() {
        let board = Board::build(2, || b'a').unwrap();
        let _ = board.letter_at(Coordinate::new(2, 0));
    }

    #[test]
    fn display_separates_cells() {
        let board = Board::from_rows("ab,cd").unwrap();
        assert_eq!(format!("{board}"), "a b\nc d");
    }

    #[test]
    fn coordinate_display() {
        assert_eq!(Coordinate::new(3, 4).to_string(), "3:4");
    }

    proptest! {
        #[test]
        fn adjacency_is_symmetric_and_irreflexive(size in 1usize..8) {
            let board = Board::build(size, || b'a').unwrap();
            for &a in board.squares() {
                prop_assert!(!board.neighbors(a).contains(&a));
                for &b in board.neighbors(a) {
                    prop_assert!(board.neighbors(b).contains(&a));
                    prop_assert!(a.row.abs_diff(b.row) <= 1 && a.col.abs_diff(b.col) <= 1);
                }
            }
        }
    }
}
