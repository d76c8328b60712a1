//! Word traces on the board
//!
//! A Path is a simple walk: an ordered list of coordinates with no repeats.

use super::{Board, Coordinate};
use std::fmt;

/// An ordered, non-repeating sequence of board coordinates
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Vec<Coordinate>);

impl Path {
    /// Wrap coordinates produced by the search
    ///
    /// Callers guarantee the coordinates are distinct.
    #[must_use]
    pub(crate) const fn from_coords(coords: Vec<Coordinate>) -> Self {
        Self(coords)
    }

    /// Coordinates in walk order
    #[inline]
    #[must_use]
    pub fn coords(&self) -> &[Coordinate] {
        &self.0
    }

    /// Number of cells visited
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last coordinate of the walk
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<Coordinate> {
        self.0.last().copied()
    }

    /// Word spelled by this path on `board`
    #[must_use]
    pub fn word(&self, board: &Board) -> String {
        board.spell(&self.0)
    }

    /// Whether this is a valid trace on `board`
    ///
    /// Checks that every coordinate is distinct and consecutive coordinates
    /// are neighbours.
    #[must_use]
    pub fn is_valid_on(&self, board: &Board) -> bool {
        let mut seen = vec![false; board.cell_count()];
        for &coord in &self.0 {
            if coord.row >= board.size() || coord.col >= board.size() {
                return false;
            }
            let idx = board.index_of(coord);
            if seen[idx] {
                return false;
            }
            seen[idx] = true;
        }

        self.0
            .windows(2)
            .all(|pair| board.neighbors(pair[0]).contains(&pair[1]))
    }
}

/// Formats as `r:c-r:c-...`
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coord) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{coord}")?;
        }
        Ok(())
    }
}
