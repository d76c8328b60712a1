//! Physical Boggle dice
//!
//! Boards larger than the classic 5×5 use several copies of the die set. The
//! pool is shuffled once per board and each die is rolled once, so no die is
//! used more often than it has copies.

use super::{BoardGenerator, DistributionError};
use crate::core::{Board, BoardError};
use rand::Rng;
use rand::seq::SliceRandom;

/// Faces of the 25 dice in classic 5×5 Boggle
pub const CLASSIC_DICE: [&str; 25] = [
    "aaafrs", "aaeeee", "aafirs", "adennn", "aeeeem", //
    "aeegmu", "aegmnn", "afirsy", "bjkqxz", "ccenst", //
    "ceiilt", "ceiplt", "ceipst", "ddhnot", "dhhlor", //
    "dhlnor", "dhlnor", "eiiitt", "emottt", "ensssu", //
    "fiprsy", "gorrvw", "iprrry", "nootuw", "ooottu",
];

/// A six-faced letter die
pub type Die = [u8; 6];

/// One die's contribution to a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieRoll {
    /// Index of the die in the base set
    pub die: usize,
    /// Letter that came up
    pub face: u8,
}

/// A base set of dice, replicated as needed to cover a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl Default for DiceSet {
    fn default() -> Self {
        Self::classic()
    }
}

impl DiceSet {
    /// The classic 25-die set
    #[must_use]
    pub fn classic() -> Self {
        Self {
            dice: CLASSIC_DICE.iter().filter_map(|faces| parse_die(faces)).collect(),
        }
    }

    /// Build a set from face strings such as `"aaafrs"`
    ///
    /// # Errors
    /// Returns `DistributionError::Empty` for no dice, or
    /// `DistributionError::InvalidDie` if a die is not six lowercase letters.
    pub fn from_faces(faces: &[&str]) -> Result<Self, DistributionError> {
        if faces.is_empty() {
            return Err(DistributionError::Empty);
        }
        let dice = faces
            .iter()
            .map(|f| parse_die(f).ok_or_else(|| DistributionError::InvalidDie((*f).to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { dice })
    }

    /// Dice in the base set
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Copies of the base set needed for a `size`×`size` board
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::generators::DiceSet;
    ///
    /// let dice = DiceSet::classic();
    /// assert_eq!(dice.copies_for(4), 1);
    /// assert_eq!(dice.copies_for(5), 1);
    /// assert_eq!(dice.copies_for(6), 2);
    /// assert_eq!(dice.copies_for(10), 4);
    /// ```
    #[must_use]
    pub fn copies_for(&self, size: usize) -> usize {
        (size * size).div_ceil(self.dice.len())
    }

    /// Shuffle the replicated pool and roll the first `size²` dice
    ///
    /// Rolls are returned in the order they are assigned to cells (row-major).
    ///
    /// # Errors
    /// Returns `BoardError::EmptyGrid` if `size` is zero.
    pub fn roll<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Result<Vec<DieRoll>, BoardError> {
        if size == 0 {
            return Err(BoardError::EmptyGrid);
        }

        let mut pool: Vec<usize> = (0..self.copies_for(size))
            .flat_map(|_| 0..self.dice.len())
            .collect();
        pool.shuffle(rng);

        let rolls = pool
            .into_iter()
            .take(size * size)
            .map(|die| DieRoll {
                die,
                face: self.dice[die][rng.random_range(0..6)],
            })
            .collect();
        Ok(rolls)
    }
}

fn parse_die(faces: &str) -> Option<Die> {
    let bytes: Die = faces.as_bytes().try_into().ok()?;
    bytes.iter().all(u8::is_ascii_lowercase).then_some(bytes)
}

/// Fills cells by rolling physical Boggle dice
#[derive(Debug, Clone, Default)]
pub struct DiceGenerator {
    dice: DiceSet,
}

impl BoardGenerator for DiceGenerator {
    fn generate<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Result<Board, BoardError> {
        let faces = self
            .dice
            .roll(size, rng)?
            .into_iter()
            .map(|roll| roll.face)
            .collect();
        Board::from_letters(size, faces)
    }
}
