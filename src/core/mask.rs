//! Masked word representation
//!
//! A mask has one slot per character of the secret word. A slot holds the
//! letter once it has been guessed and is hidden otherwise.

use super::{Letter, LetterSet, SecretWord};
use std::fmt;

/// Marker shown for a hidden slot
pub const PLACEHOLDER: char = '_';

/// The secret word with unguessed letters hidden
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedWord(Vec<Option<Letter>>);

impl MaskedWord {
    /// Reveal every position of `secret` whose letter is in `revealed`
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Letter, LetterSet, MaskedWord, SecretWord};
    ///
    /// let secret = SecretWord::new("CAT").unwrap();
    /// let revealed: LetterSet = [Letter::new('A').unwrap()].into_iter().collect();
    ///
    /// assert_eq!(MaskedWord::reveal(&secret, revealed).to_string(), "_ A _");
    /// ```
    #[must_use]
    pub fn reveal(secret: &SecretWord, revealed: LetterSet) -> Self {
        Self(
            secret
                .letters()
                .iter()
                .map(|&letter| revealed.contains(letter).then_some(letter))
                .collect(),
        )
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the slots joined by `separator`
    #[must_use]
    pub fn to_spaced(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(|slot| slot.map_or(PLACEHOLDER, Letter::as_char).to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Check whether `word` could sit behind this mask
    ///
    /// Lengths must agree, revealed slots must match, and hidden slots must
    /// not hold a letter that is already revealed elsewhere.
    #[must_use]
    pub fn matches(&self, word: &SecretWord) -> bool {
        if word.len() != self.len() {
            return false;
        }

        let revealed: LetterSet = self.0.iter().flatten().copied().collect();

        self.0
            .iter()
            .zip(word.letters())
            .all(|(slot, &letter)| match slot {
                Some(shown) => *shown == letter,
                None => !revealed.contains(letter),
            })
    }
}

impl fmt::Display for MaskedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_spaced(" "))
    }
}
