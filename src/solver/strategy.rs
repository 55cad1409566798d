//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::FrequencyStrategy;
use crate::core::{Letter, LetterSet, SecretWord};

/// A strategy for picking the next letter to guess
pub trait Strategy {
    /// Select an unguessed letter given the words still consistent with the game
    ///
    /// Returns `None` only when every letter of the alphabet has been guessed.
    fn select_letter(&self, candidates: &[&SecretWord], guessed: LetterSet) -> Option<Letter>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most common letter among candidates (default)
    Frequency(FrequencyStrategy),
    /// First unguessed letter in alphabet order
    Alphabetical(AlphabeticalStrategy),
    /// Uniformly random unguessed letter
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, candidates: &[&SecretWord], guessed: LetterSet) -> Option<Letter> {
        match self {
            Self::Frequency(s) => s.select_letter(candidates, guessed),
            Self::Alphabetical(s) => s.select_letter(candidates, guessed),
            Self::Random(s) => s.select_letter(candidates, guessed),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "alphabetical", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "alphabetical" | "abc" => Self::Alphabetical(AlphabeticalStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Alphabetical(_) => "alphabetical",
            Self::Random(_) => "random",
        }
    }
}

/// Baseline strategy
///
/// Walks the alphabet from A to Z regardless of the candidates.
pub struct AlphabeticalStrategy;

impl Strategy for AlphabeticalStrategy {
    fn select_letter(&self, _candidates: &[&SecretWord], guessed: LetterSet) -> Option<Letter> {
        Letter::ALPHABET
            .into_iter()
            .find(|&letter| !guessed.contains(letter))
    }
}

/// Random strategy
///
/// Picks uniformly among the unguessed letters.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter(&self, _candidates: &[&SecretWord], guessed: LetterSet) -> Option<Letter> {
        use rand::prelude::IndexedRandom;

        let remaining: Vec<Letter> = Letter::ALPHABET
            .into_iter()
            .filter(|&letter| !guessed.contains(letter))
            .collect();

        remaining.choose(&mut rand::rng()).copied()
    }
}
