//! Frequency-weighted letter selection
//!
//! Letters are drawn with probability proportional to how often they occur in
//! a corpus, using cumulative-weight sampling over a fixed letter ordering.

use super::BoardGenerator;
use crate::core::{Board, BoardError};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for letter sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistributionError {
    /// No letters with positive weight
    Empty,
    /// Supplied total does not equal the sum of the weights
    TotalMismatch { expected: u64, actual: u64 },
    /// A letter in the ordering has no weight
    MissingWeight(char),
    /// A letter is not lowercase ASCII
    InvalidLetter(char),
    /// A die does not have exactly six letter faces
    InvalidDie(String),
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Letter source is empty"),
            Self::TotalMismatch { expected, actual } => {
                write!(f, "Weights sum to {actual}, but total is {expected}")
            }
            Self::MissingWeight(ch) => write!(f, "Letter '{ch}' has no weight"),
            Self::InvalidLetter(ch) => write!(f, "'{ch}' is not a lowercase ASCII letter"),
            Self::InvalidDie(faces) => write!(f, "Die '{faces}' must have six letter faces"),
        }
    }
}

impl std::error::Error for DistributionError {}

/// Letter frequencies of a corpus
///
/// Letters are ordered by descending count, ties broken alphabetically. The
/// ordering is fixed once built, so a given random draw always maps to the
/// same letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterDistribution {
    letters: Vec<u8>,
    counts: Vec<u64>,
    cumulative: Vec<u64>,
    total: u64,
}

impl LetterDistribution {
    /// Count the letters of every word
    ///
    /// Non-letters are ignored.
    ///
    /// # Errors
    /// Returns `DistributionError::Empty` if the words contain no letters.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::generators::LetterDistribution;
    ///
    /// let dist = LetterDistribution::from_words(["seen", "tee"]).unwrap();
    /// assert_eq!(dist.letters()[0], b'e');
    /// assert_eq!(dist.weight(b'e'), 4);
    /// assert_eq!(dist.total(), 7);
    /// ```
    pub fn from_words<I, S>(words: I) -> Result<Self, DistributionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: FxHashMap<u8, u64> = FxHashMap::default();
        for word in words {
            for letter in word.as_ref().bytes().filter(u8::is_ascii_alphabetic) {
                *counts.entry(letter.to_ascii_lowercase()).or_insert(0) += 1;
            }
        }

        let mut letters: Vec<u8> = counts.keys().copied().collect();
        letters.sort_unstable_by(|a, b| counts[b].cmp(&counts[a]).then(a.cmp(b)));
        let total = counts.values().sum();

        Self::from_parts(letters, &counts, total)
    }

    /// Build from an explicit `(letters, weights, total)` triple
    ///
    /// `letters` fixes the sampling order.
    ///
    /// # Errors
    /// Returns `DistributionError` if the ordering is empty, a letter is
    /// missing from `weights` or is not lowercase ASCII, or `total` differs
    /// from the sum of the weights.
    pub fn from_parts<S>(
        letters: Vec<u8>,
        weights: &std::collections::HashMap<u8, u64, S>,
        total: u64,
    ) -> Result<Self, DistributionError>
    where
        S: std::hash::BuildHasher,
    {
        if let Some(&bad) = letters.iter().find(|l| !l.is_ascii_lowercase()) {
            return Err(DistributionError::InvalidLetter(char::from(bad)));
        }

        let counts = letters
            .iter()
            .map(|l| {
                weights
                    .get(l)
                    .copied()
                    .ok_or(DistributionError::MissingWeight(char::from(*l)))
            })
            .collect::<Result<Vec<u64>, _>>()?;

        let cumulative: Vec<u64> = counts
            .iter()
            .scan(0u64, |sum, &count| {
                *sum += count;
                Some(*sum)
            })
            .collect();

        let actual = cumulative.last().copied().unwrap_or(0);
        if actual == 0 {
            return Err(DistributionError::Empty);
        }
        if actual != total {
            return Err(DistributionError::TotalMismatch {
                expected: total,
                actual,
            });
        }

        Ok(Self {
            letters,
            counts,
            cumulative,
            total,
        })
    }

    /// Letters in sampling order
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Count recorded for `letter` (0 if absent)
    #[must_use]
    pub fn weight(&self, letter: u8) -> u64 {
        self.letters
            .iter()
            .position(|&l| l == letter)
            .map_or(0, |pos| self.counts[pos])
    }

    /// Sum of all weights
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Letter selected by the draw `ticket` in `0..total`
    ///
    /// Walks the letters in order, accumulating weights, and returns the first
    /// letter whose running sum exceeds `ticket`.
    ///
    /// # Panics
    /// Panics if `ticket >= total`.
    #[must_use]
    pub fn letter_for(&self, ticket: u64) -> u8 {
        let pos = self.cumulative.partition_point(|&sum| sum <= ticket);
        self.letters[pos]
    }

    /// Draw one letter
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        self.letter_for(rng.random_range(0..self.total))
    }
}

/// Fills each cell independently from a corpus letter distribution
#[derive(Debug, Clone)]
pub struct WeightedGenerator {
    distribution: LetterDistribution,
}

impl WeightedGenerator {
    #[must_use]
    pub const fn new(distribution: LetterDistribution) -> Self {
        Self { distribution }
    }
}

impl BoardGenerator for WeightedGenerator {
    fn generate<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Result<Board, BoardError> {
        Board::build(size, || self.distribution.sample(rng))
    }
}
