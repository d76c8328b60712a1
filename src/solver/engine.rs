//! Main Boggle solver interface
//!
//! The search walks the board and the prefix index together. Every step
//! moves from the tip of the current path to an unvisited neighbour and from
//! the current index node to the child for that neighbour's letter. When the
//! index has no such child no vocabulary word continues the prefix and the
//! branch is dropped.

use super::SearchResult;
use crate::core::{Board, Coordinate, NodeId, Path, PrefixIndex};
use rayon::prelude::*;
use tracing::debug;

/// Tunables for a search run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Longest path to explore, in cells (`None` = unbounded, `0` = nothing)
    pub max_depth: Option<usize>,
    /// Search each starting cell on the rayon pool
    pub parallel: bool,
}

impl SearchConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: None,
            parallel: false,
        }
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Main Boggle solver
///
/// Holds a borrowed vocabulary so one index can serve any number of boards,
/// from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    index: &'a PrefixIndex,
    config: SearchConfig,
}

/// One level of the depth-first walk: the index node reached by the path so
/// far and the next neighbour of the path's tip to try
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    next_neighbor: usize,
}

impl<'a> Solver<'a> {
    /// Create a solver with the default configuration
    #[must_use]
    pub const fn new(index: &'a PrefixIndex) -> Self {
        Self::with_config(index, SearchConfig::new())
    }

    #[must_use]
    pub const fn with_config(index: &'a PrefixIndex, config: SearchConfig) -> Self {
        Self { index, config }
    }

    #[must_use]
    pub const fn config(&self) -> SearchConfig {
        self.config
    }

    /// Find every vocabulary word traceable on `board`, with all its paths
    ///
    /// Starting cells are processed in row-major order and their paths are
    /// concatenated in that order, so the output is the same whether or not
    /// the parallel mode is enabled.
    pub fn solve(&self, board: &Board) -> SearchResult {
        let per_start: Vec<Vec<Path>> = if self.config.parallel {
            board
                .squares()
                .par_iter()
                .map(|&start| self.find_paths_from(board, start))
                .collect()
        } else {
            board
                .squares()
                .iter()
                .map(|&start| self.find_paths_from(board, start))
                .collect()
        };

        let mut result = SearchResult::default();
        for path in per_start.into_iter().flatten() {
            result.record(path.word(board), path);
        }

        debug!(
            size = board.size(),
            words = result.len(),
            paths = result.path_count(),
            "board solved"
        );
        result
    }

    /// Count the distinct words on `board`
    pub fn count_words(&self, board: &Board) -> usize {
        self.solve(board).len()
    }

    /// Every accepted path that begins at `start`
    ///
    /// Paths come out in the order a recursive depth-first search would
    /// produce them: a path is recorded when its node is terminal, before any
    /// of its extensions, and neighbours are tried in row-major order.
    #[must_use]
    pub fn find_paths_from(&self, board: &Board, start: Coordinate) -> Vec<Path> {
        let mut found = Vec::new();
        let max_depth = self.config.max_depth.unwrap_or(usize::MAX);
        if max_depth == 0 {
            return found;
        }
        let Some(root) = self.index.child(PrefixIndex::ROOT, board.letter_at(start)) else {
            return found;
        };

        let mut visited = vec![false; board.cell_count()];
        let mut path = vec![start];
        let mut stack = vec![Frame {
            node: root,
            next_neighbor: 0,
        }];
        visited[board.index_of(start)] = true;

        if self.index.is_terminal(root) {
            found.push(Path::from_coords(path.clone()));
        }

        while let Some(frame) = stack.last_mut() {
            // path and stack grow and shrink together
            let tip = path[path.len() - 1];
            let neighbors = board.neighbors(tip);

            if path.len() >= max_depth || frame.next_neighbor >= neighbors.len() {
                stack.pop();
                if let Some(done) = path.pop() {
                    visited[board.index_of(done)] = false;
                }
                continue;
            }

            let next = neighbors[frame.next_neighbor];
            frame.next_neighbor += 1;

            let next_idx = board.index_of(next);
            if visited[next_idx] {
                continue;
            }
            let Some(child) = self.index.child(frame.node, board.letter_at(next)) else {
                continue;
            };

            visited[next_idx] = true;
            path.push(next);
            stack.push(Frame {
                node: child,
                next_neighbor: 0,
            });

            if self.index.is_terminal(child) {
                found.push(Path::from_coords(path.clone()));
            }
        }

        found
    }
}

/// Find all words on `board` with the default configuration
///
/// # Examples
/// ```
/// use boggle_solver::core::{Board, PrefixIndex};
/// use boggle_solver::solver::find_words;
///
/// let board = Board::from_rows("pas,tch,exy").unwrap();
/// let index = PrefixIndex::from_words(["past", "paste", "patch"]).unwrap();
///
/// let result = find_words(&board, &index);
/// assert!(result.contains("patch"));
/// assert!(!result.contains("past"));
/// ```
#[must_use]
pub fn find_words(board: &Board, index: &PrefixIndex) -> SearchResult {
    Solver::new(index).solve(board)
}
