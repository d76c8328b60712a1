//! Board generators
//!
//! Each generator fills an N×N board under a different letter-selection
//! policy. All of them draw from a caller-supplied RNG so runs can be
//! reproduced from a seed.

pub mod dice;
pub mod uniform;
pub mod weighted;

pub use dice::{CLASSIC_DICE, DiceGenerator, DiceSet, DieRoll};
pub use uniform::{ALPHABET, UniformGenerator};
pub use weighted::{DistributionError, LetterDistribution, WeightedGenerator};

use crate::core::{Board, BoardError};
use rand::Rng;

/// A policy for filling a board with letters
pub trait BoardGenerator {
    /// Generate a `size`×`size` board
    ///
    /// # Errors
    /// Returns `BoardError::EmptyGrid` if `size` is zero.
    fn generate<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Result<Board, BoardError>;
}

/// Names accepted by [`GeneratorType::from_name`]
pub const GENERATOR_NAMES: [&str; 3] = ["uniform", "weighted", "dice"];

/// Enum wrapper for all generator types
///
/// Allows runtime selection of a generator while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum GeneratorType {
    /// Every letter equally likely
    Uniform(UniformGenerator),
    /// Letters weighted by corpus frequency
    Weighted(WeightedGenerator),
    /// Classic Boggle dice
    Dice(DiceGenerator),
}

impl BoardGenerator for GeneratorType {
    fn generate<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Result<Board, BoardError> {
        match self {
            Self::Uniform(g) => g.generate(size, rng),
            Self::Weighted(g) => g.generate(size, rng),
            Self::Dice(g) => g.generate(size, rng),
        }
    }
}

impl GeneratorType {
    /// Create a generator from its name
    ///
    /// Supported names: "uniform", "weighted", "dice". The weighted generator
    /// samples from `distribution`. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str, distribution: &LetterDistribution) -> Option<Self> {
        match name {
            "uniform" | "even" => Some(Self::Uniform(UniformGenerator::default())),
            "weighted" | "frequency" => Some(Self::Weighted(WeightedGenerator::new(
                distribution.clone(),
            ))),
            "dice" | "boggle" => Some(Self::Dice(DiceGenerator::default())),
            _ => None,
        }
    }

    /// One generator of each kind, in the order of [`GENERATOR_NAMES`]
    #[must_use]
    pub fn all(distribution: &LetterDistribution) -> Vec<Self> {
        GENERATOR_NAMES
            .iter()
            .filter_map(|name| Self::from_name(name, distribution))
            .collect()
    }

    /// Canonical name of this generator
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Uniform(_) => "uniform",
            Self::Weighted(_) => "weighted",
            Self::Dice(_) => "dice",
        }
    }

    /// Human-readable description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Uniform(_) => "even distribution",
            Self::Weighted(_) => "weighted distribution",
            Self::Dice(_) => "boggle distribution",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn distribution() -> LetterDistribution {
        LetterDistribution::from_words(["stone", "tears"]).unwrap()
    }

    #[test]
    fn from_name_known_and_aliases() {
        let dist = distribution();
        assert_eq!(GeneratorType::from_name("uniform", &dist).unwrap().name(), "uniform");
        assert_eq!(GeneratorType::from_name("even", &dist).unwrap().name(), "uniform");
        assert_eq!(GeneratorType::from_name("weighted", &dist).unwrap().name(), "weighted");
        assert_eq!(GeneratorType::from_name("boggle", &dist).unwrap().name(), "dice");
        assert!(GeneratorType::from_name("nonsense", &dist).is_none());
    }

    #[test]
    fn all_covers_every_name() {
        let names: Vec<&str> = GeneratorType::all(&distribution())
            .iter()
            .map(GeneratorType::name)
            .collect();
        assert_eq!(names, GENERATOR_NAMES);
    }

    #[test]
    fn every_generator_fills_the_board() {
        let mut rng = StdRng::seed_from_u64(17);
        for generator in GeneratorType::all(&distribution()) {
            for size in [1, 4, 6] {
                let board = generator.generate(size, &mut rng).unwrap();
                assert_eq!(board.cell_count(), size * size, "{}", generator.name());
            }
        }
    }

    #[test]
    fn weighted_uses_corpus_letters_only() {
        let generator = GeneratorType::from_name("weighted", &distribution()).unwrap();
        let board = generator.generate(5, &mut StdRng::seed_from_u64(4)).unwrap();
        for row in board.rows() {
            assert!(row.bytes().all(|b| b"stonear".contains(&b)));
        }
    }
}
