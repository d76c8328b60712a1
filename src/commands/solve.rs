//! Board solving command
//!
//! Solves one board, either given explicitly or freshly generated.

use super::make_rng;
use crate::core::Board;
use crate::generators::{BoardGenerator, GeneratorType};
use crate::solver::{SearchResult, Solver};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Configuration for solving a board
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub size: usize,
    /// Explicit board such as `"pas,tch,exy"`; generated when `None`
    pub board: Option<String>,
    pub seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            board: None,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_board(mut self, board: impl Into<String>) -> Self {
        self.board = Some(board.into());
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of solving a board
pub struct SolveResult {
    pub board: Board,
    pub result: SearchResult,
    /// Generator that produced the board (`None` for explicit boards)
    pub generator: Option<&'static str>,
    pub duration: Duration,
}

/// Solve an explicit or generated board
///
/// # Errors
///
/// Returns an error if the explicit board cannot be parsed or the configured
/// size is zero.
#[instrument(skip(solver, generator), fields(generator = generator.name()))]
pub fn solve_board(
    config: &SolveConfig,
    solver: &Solver,
    generator: &GeneratorType,
) -> Result<SolveResult, String> {
    let (board, source) = match &config.board {
        Some(text) => (
            Board::from_rows(text).map_err(|e| format!("Invalid board: {e}"))?,
            None,
        ),
        None => {
            let mut rng = make_rng(config.seed);
            let board = generator
                .generate(config.size, &mut rng)
                .map_err(|e| format!("Cannot generate board: {e}"))?;
            (board, Some(generator.name()))
        }
    };

    let start = Instant::now();
    let result = solver.solve(&board);
    let duration = start.elapsed();

    debug!(
        words = result.len(),
        max_depth = ?solver.config().max_depth,
        parallel = solver.config().parallel,
        ?duration,
        "solve finished"
    );

    Ok(SolveResult {
        board,
        result,
        generator: source,
        duration,
    })
}
