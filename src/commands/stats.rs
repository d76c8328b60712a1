//! Statistics command
//!
//! Solves many random boards from one generator and reports how many words
//! they hold. Each repetition seeds its own RNG from the run seed and the
//! repetition number, so parallel and sequential runs see the same boards.

use crate::core::{Board, BoardError};
use crate::generators::{BoardGenerator, GeneratorType};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// Boards per generator when not configured
pub const DEFAULT_REPS: usize = 1000;

/// Configuration for a statistics run
#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub size: usize,
    pub reps: usize,
    /// Run seed (random when `None`)
    pub seed: Option<u64>,
    /// Solve repetitions on the rayon pool
    pub parallel: bool,
    pub show_progress: bool,
}

impl StatsConfig {
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            reps: DEFAULT_REPS,
            seed: None,
            parallel: false,
            show_progress: false,
        }
    }

    #[must_use]
    pub const fn with_reps(mut self, reps: usize) -> Self {
        self.reps = reps;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

/// Result of a statistics run
#[derive(Debug)]
pub struct StatsResult {
    pub generator: &'static str,
    pub description: &'static str,
    /// Seed the run used, for reproducing it
    pub seed: u64,
    pub boards: usize,
    /// Word count of each board, by repetition
    pub word_counts: Vec<usize>,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// First board that reached `max_words`
    pub best_board: Option<Board>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

impl StatsResult {
    /// Group word counts into at most `buckets` equal-width bins
    ///
    /// Returns `(lower_bound, boards)` pairs covering `0..=max_words`.
    #[must_use]
    pub fn histogram(&self, buckets: usize) -> Vec<(usize, usize)> {
        if self.word_counts.is_empty() {
            return Vec::new();
        }
        let width = (self.max_words + 1).div_ceil(buckets.max(1)).max(1);
        let mut bins = vec![0; self.max_words / width + 1];
        for &count in &self.word_counts {
            bins[count / width] += 1;
        }
        bins.into_iter()
            .enumerate()
            .map(|(i, boards)| (i * width, boards))
            .collect()
    }
}

fn rep_rng(seed: u64, rep: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (rep as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

fn progress_bar(config: &StatsConfig, generator: &GeneratorType) -> ProgressBar {
    if !config.show_progress {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(config.reps as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb.set_message(generator.description());
    pb
}

/// Solve `config.reps` boards from `generator` and summarize their word counts
///
/// # Errors
///
/// Returns `BoardError::EmptyGrid` if the configured size is zero.
#[instrument(skip(solver, generator), fields(generator = generator.name()))]
pub fn run_stats(
    solver: &Solver,
    generator: &GeneratorType,
    config: &StatsConfig,
) -> Result<StatsResult, BoardError> {
    if config.size == 0 {
        return Err(BoardError::EmptyGrid);
    }

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let pb = progress_bar(config, generator);
    let start = Instant::now();

    let count_rep = |rep: usize| -> Result<usize, BoardError> {
        let board = generator.generate(config.size, &mut rep_rng(seed, rep))?;
        let words = solver.count_words(&board);
        pb.inc(1);
        Ok(words)
    };

    let word_counts: Vec<usize> = if config.parallel {
        (0..config.reps)
            .into_par_iter()
            .map(count_rep)
            .collect::<Result<_, _>>()?
    } else {
        (0..config.reps).map(count_rep).collect::<Result<_, _>>()?
    };

    pb.finish_and_clear();
    let duration = start.elapsed();

    let boards = word_counts.len();
    let total_words: usize = word_counts.iter().sum();
    let min_words = word_counts.iter().copied().min().unwrap_or(0);
    let max_words = word_counts.iter().copied().max().unwrap_or(0);
    let average_words = if boards == 0 {
        0.0
    } else {
        total_words as f64 / boards as f64
    };

    // Boards are not kept; the best one is regenerated from its seed
    let best_board = word_counts
        .iter()
        .position(|&count| count == max_words)
        .map(|rep| generator.generate(config.size, &mut rep_rng(seed, rep)))
        .transpose()?;

    let secs = duration.as_secs_f64();
    let boards_per_second = if secs > 0.0 { boards as f64 / secs } else { 0.0 };

    info!(
        boards,
        average = average_words,
        min = min_words,
        max = max_words,
        "statistics complete"
    );

    Ok(StatsResult {
        generator: generator.name(),
        description: generator.description(),
        seed,
        boards,
        word_counts,
        total_words,
        average_words,
        min_words,
        max_words,
        best_board,
        duration,
        boards_per_second,
    })
}

/// Run [`run_stats`] for each generator in turn
///
/// # Errors
///
/// Returns `BoardError::EmptyGrid` if the configured size is zero.
pub fn run_comparison(
    solver: &Solver,
    generators: &[GeneratorType],
    config: &StatsConfig,
) -> Result<Vec<StatsResult>, BoardError> {
    generators
        .iter()
        .map(|generator| run_stats(solver, generator, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PrefixIndex;
    use crate::generators::LetterDistribution;
    use crate::wordlists::WORDS;

    fn index() -> PrefixIndex {
        PrefixIndex::from_words(WORDS).unwrap()
    }

    fn generator(name: &str) -> GeneratorType {
        let dist = LetterDistribution::from_words(WORDS).unwrap();
        GeneratorType::from_name(name, &dist).unwrap()
    }

    #[test]
    fn stats_run_counts_every_board() {
        let index = index();
        let solver = Solver::new(&index);
        let config = StatsConfig::new(4).with_reps(25).with_seed(1);

        let result = run_stats(&solver, &generator("weighted"), &config).unwrap();

        assert_eq!(result.boards, 25);
        assert_eq!(result.word_counts.len(), 25);
        assert_eq!(result.total_words, result.word_counts.iter().sum::<usize>());
        assert_eq!(result.seed, 1);
        assert_eq!(result.generator, "weighted");
    }

    #[test]
    fn stats_metrics_consistency() {
        let index = index();
        let solver = Solver::new(&index);
        let config = StatsConfig::new(5).with_reps(30).with_seed(8);

        let result = run_stats(&solver, &generator("dice"), &config).unwrap();

        assert!(result.min_words <= result.max_words);
        assert!(result.average_words >= result.min_words as f64);
        assert!(result.average_words <= result.max_words as f64);
    }

    #[test]
    fn best_board_holds_max_words() {
        let index = index();
        let solver = Solver::new(&index);
        let config = StatsConfig::new(4).with_reps(20).with_seed(77);

        let result = run_stats(&solver, &generator("dice"), &config).unwrap();
        let best = result.best_board.as_ref().unwrap();

        assert_eq!(solver.count_words(best), result.max_words);
    }

    #[test]
    fn parallel_matches_sequential() {
        let index = index();
        let solver = Solver::new(&index);
        let config = StatsConfig::new(4).with_reps(40).with_seed(5);

        let sequential = run_stats(&solver, &generator("uniform"), &config).unwrap();
        let parallel =
            run_stats(&solver, &generator("uniform"), &config.with_parallel(true)).unwrap();

        assert_eq!(sequential.word_counts, parallel.word_counts);
        assert_eq!(sequential.best_board, parallel.best_board);
    }

    #[test]
    fn zero_reps_yields_empty_summary() {
        let index = index();
        let solver = Solver::new(&index);
        let config = StatsConfig::new(5).with_reps(0).with_seed(0);

        let result = run_stats(&solver, &generator("dice"), &config).unwrap();

        assert_eq!(result.boards, 0);
        assert!(result.average_words.abs() < f64::EPSILON);
        assert!(result.best_board.is_none());
        assert!(result.histogram(10).is_empty());
    }

    #[test]
    fn zero_size_is_an_error() {
        let index = index();
        let solver = Solver::new(&index);

        let err = run_stats(&solver, &generator("dice"), &StatsConfig::new(0)).unwrap_err();
        assert_eq!(err, BoardError::EmptyGrid);
    }

    #[test]
    fn empty_vocabulary_finds_nothing() {
        let index = PrefixIndex::new();
        let solver = Solver::new(&index);
        let config = StatsConfig::new(4).with_reps(5).with_seed(3);

        let result = run_stats(&solver, &generator("uniform"), &config).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.max_words, 0);
    }

    #[test]
    fn comparison_runs_each_generator() {
        let index = index();
        let solver = Solver::new(&index);
        let dist = LetterDistribution::from_words(WORDS).unwrap();
        let config = StatsConfig::new(4).with_reps(5).with_seed(12);

        let results = run_comparison(&solver, &GeneratorType::all(&dist), &config).unwrap();

        let names: Vec<&str> = results.iter().map(|r| r.generator).collect();
        assert_eq!(names, ["uniform", "weighted", "dice"]);
        assert!(results.iter().all(|r| r.boards == 5));
    }

    #[test]
    fn histogram_bins_cover_all_boards() {
        let result = StatsResult {
            generator: "dice",
            description: "boggle distribution",
            seed: 0,
            boards: 3,
            word_counts: vec![0, 5, 10],
            total_words: 15,
            average_words: 5.0,
            min_words: 0,
            max_words: 10,
            best_board: None,
            duration: Duration::ZERO,
            boards_per_second: 0.0,
        };

        assert_eq!(result.histogram(2), vec![(0, 2), (6, 1)]);
        assert_eq!(result.histogram(0), vec![(0, 3)]);
        assert_eq!(result.histogram(11).len(), 11);
    }
}
