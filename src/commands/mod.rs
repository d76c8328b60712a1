//! Command implementations

pub mod generate;
pub mod solve;
pub mod stats;
pub mod words;

pub use generate::{DEFAULT_MIN_WORDS, GenerateConfig, Puzzle, generate_puzzles};
pub use solve::{SolveConfig, SolveResult, solve_board};
pub use stats::{StatsConfig, StatsResult, run_comparison, run_stats};
pub use words::{dump_tree, dump_words};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// RNG for a run: seeded when a seed is given, from the OS otherwise
#[must_use]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn seeded_rng_is_deterministic() {
        let a: u64 = make_rng(Some(9)).random();
        let b: u64 = make_rng(Some(9)).random();
        assert_eq!(a, b);
    }
}
