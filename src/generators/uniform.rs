//! Uniform letter selection

use super::{BoardGenerator, DistributionError};
use crate::core::{Board, BoardError};
use rand::Rng;

/// The 26 lowercase letters
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Fills each cell independently and uniformly from an alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformGenerator {
    alphabet: Vec<u8>,
}

impl Default for UniformGenerator {
    fn default() -> Self {
        Self {
            alphabet: ALPHABET.to_vec(),
        }
    }
}

impl UniformGenerator {
    /// Create a generator over a custom alphabet
    ///
    /// # Errors
    /// Returns `DistributionError` if the alphabet is empty or contains
    /// anything but lowercase ASCII letters.
    pub fn new(alphabet: impl Into<Vec<u8>>) -> Result<Self, DistributionError> {
        let alphabet = alphabet.into();
        if alphabet.is_empty() {
            return Err(DistributionError::Empty);
        }
        if let Some(&bad) = alphabet.iter().find(|b| !b.is_ascii_lowercase()) {
            return Err(DistributionError::InvalidLetter(char::from(bad)));
        }
        Ok(Self { alphabet })
    }

    #[must_use]
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }
}

impl BoardGenerator for UniformGenerator {
    fn generate<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Result<Board, BoardError> {
        Board::build(size, || self.alphabet[rng.random_range(0..self.alphabet.len())])
    }
}
