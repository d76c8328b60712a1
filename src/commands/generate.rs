//! Puzzle generation command
//!
//! Generates boards and keeps the ones rich enough to be worth playing.

use super::make_rng;
use crate::core::{Board, BoardError};
use crate::generators::{BoardGenerator, GeneratorType};
use crate::solver::{SearchResult, Solver};
use tracing::{debug, info, instrument};

/// Word count a board needs to be kept when not configured (every board)
pub const DEFAULT_MIN_WORDS: usize = 0;

/// Configuration for puzzle generation
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub size: usize,
    /// Boards to try
    pub count: usize,
    /// Minimum distinct words for a board to be kept
    pub min_words: usize,
    pub seed: Option<u64>,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(size: usize, count: usize) -> Self {
        Self {
            size,
            count,
            min_words: DEFAULT_MIN_WORDS,
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A generated board that met the word threshold
#[derive(Debug, Clone)]
pub struct Puzzle {
    /// 1-based attempt that produced the board
    pub attempt: usize,
    pub board: Board,
    pub result: SearchResult,
}

/// Generate `config.count` boards, keeping those with at least
/// `config.min_words` distinct words
///
/// # Errors
///
/// Returns `BoardError::EmptyGrid` if the configured size is zero.
#[instrument(skip(solver, generator), fields(generator = generator.name()))]
pub fn generate_puzzles(
    solver: &Solver,
    generator: &GeneratorType,
    config: &GenerateConfig,
) -> Result<Vec<Puzzle>, BoardError> {
    let mut rng = make_rng(config.seed);
    let mut puzzles = Vec::new();

    for attempt in 1..=config.count {
        let board = generator.generate(config.size, &mut rng)?;
        let result = solver.solve(&board);
        if result.len() >= config.min_words {
            debug!(attempt, words = result.len(), "puzzle kept");
            puzzles.push(Puzzle {
                attempt,
                board,
                result,
            });
        }
    }

    info!(
        tried = config.count,
        kept = puzzles.len(),
        "puzzle generation complete"
    );
    Ok(puzzles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PrefixIndex;
    use crate::generators::LetterDistribution;
    use crate::wordlists::WORDS;

    fn setup() -> (PrefixIndex, GeneratorType) {
        let index = PrefixIndex::from_words(WORDS).unwrap();
        let dist = LetterDistribution::from_words(WORDS).unwrap();
        (index, GeneratorType::from_name("weighted", &dist).unwrap())
    }

    #[test]
    fn zero_threshold_keeps_every_board() {
        let (index, generator) = setup();
        let solver = Solver::new(&index);
        let config = GenerateConfig::new(4, 6).with_min_words(0).with_seed(10);

        let puzzles = generate_puzzles(&solver, &generator, &config).unwrap();

        let attempts: Vec<usize> = puzzles.iter().map(|p| p.attempt).collect();
        assert_eq!(attempts, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn default_config_keeps_boards_from_builtin_list() {
        let (index, generator) = setup();
        let solver = Solver::new(&index);
        let config = GenerateConfig::new(5, 4).with_seed(6);

        let puzzles = generate_puzzles(&solver, &generator, &config).unwrap();

        assert_eq!(config.min_words, DEFAULT_MIN_WORDS);
        assert_eq!(puzzles.len(), 4);
    }

    #[test]
    fn kept_boards_meet_threshold() {
        let (index, generator) = setup();
        let solver = Solver::new(&index);
        let config = GenerateConfig::new(5, 30).with_min_words(3).with_seed(21);

        let puzzles = generate_puzzles(&solver, &generator, &config).unwrap();

        for puzzle in &puzzles {
            assert!(puzzle.result.len() >= 3);
            assert_eq!(puzzle.result, solver.solve(&puzzle.board));
        }
    }

    #[test]
    fn unreachable_threshold_keeps_nothing() {
        let (index, generator) = setup();
        let solver = Solver::new(&index);
        let config = GenerateConfig::new(4, 5)
            .with_min_words(WORDS.len() + 1)
            .with_seed(1);

        assert!(generate_puzzles(&solver, &generator, &config).unwrap().is_empty());
    }

    #[test]
    fn same_seed_same_puzzles() {
        let (index, generator) = setup();
        let solver = Solver::new(&index);
        let config = GenerateConfig::new(4, 8).with_min_words(1).with_seed(99);

        let first = generate_puzzles(&solver, &generator, &config).unwrap();
        let second = generate_puzzles(&solver, &generator, &config).unwrap();

        let boards = |puzzles: &[Puzzle]| puzzles.iter().map(|p| p.board.clone()).collect::<Vec<_>>();
        assert_eq!(boards(&first), boards(&second));
    }

    #[test]
    fn zero_size_is_an_error() {
        let (index, generator) = setup();
        let solver = Solver::new(&index);

        let result = generate_puzzles(&solver, &generator, &GenerateConfig::new(0, 3));
        assert_eq!(result.unwrap_err(), BoardError::EmptyGrid);
    }
}
