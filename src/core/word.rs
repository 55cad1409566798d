//! Secret word representation
//!
//! A `SecretWord` stores an uppercase word along with letter position indices
//! so a correct guess can reveal every occurrence at once.

use super::{Letter, LetterSet};
use rustc_hash::FxHashMap;
use std::fmt;

/// An uppercase secret word with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: Vec<Letter>,
    distinct: LetterSet,
    letter_positions: FxHashMap<Letter, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacter(c) => {
                write!(f, "Word must contain only letters A-Z, found '{c}'")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// Surrounding whitespace is trimmed and lowercase is normalized.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("rust").unwrap();
    /// assert_eq!(word.text(), "RUST");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("next.js").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = trimmed
            .chars()
            .map(|c| Letter::new(c).map_err(|_| WordError::InvalidCharacter(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut letter_positions: FxHashMap<Letter, Vec<usize>> = FxHashMap::default();
        for (i, &letter) in letters.iter().enumerate() {
            letter_positions.entry(letter).or_default().push(i);
        }

        Ok(Self {
            text: letters.iter().map(|l| l.as_char()).collect(),
            distinct: letters.iter().copied().collect(),
            letters,
            letter_positions,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters, counting repeats
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The set of distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn distinct_letters(&self) -> LetterSet {
        self.distinct
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.distinct.contains(letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let word = SecretWord::new("CODE").unwrap();
        assert_eq!(word.text(), "CODE");
        assert_eq!(word.len(), 4);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        let word = SecretWord::new("  TypeScript \n").unwrap();
        assert_eq!(word.text(), "TYPESCRIPT");
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
        assert_eq!(SecretWord::new("   "), Err(WordError::Empty));
        assert_eq!(
            SecretWord::new("NEXT.JS"),
            Err(WordError::InvalidCharacter('.'))
        );
        assert_eq!(
            SecretWord::new("WEB SITE"),
            Err(WordError::InvalidCharacter(' '))
        );
        assert!(SecretWord::new("C3PO").is_err());
    }

    #[test]
    fn word_contains() {
        let word = SecretWord::new("API").unwrap();
        assert!(word.contains(letter('A')));
        assert!(word.contains(letter('p')));
        assert!(!word.contains(letter('Z')));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = SecretWord::new("PROGRAMMING").unwrap();
        assert_eq!(word.positions_of(letter('R')), &[1, 4]);
        assert_eq!(word.positions_of(letter('M')), &[6, 7]);
        assert_eq!(word.positions_of(letter('P')), &[0]);
        assert_eq!(word.positions_of(letter('Z')), &[] as &[usize]);
    }

    #[test]
    fn word_distinct_letters() {
        let word = SecretWord::new("DEVELOPER").unwrap();
        let distinct: String = word.distinct_letters().iter().map(Letter::as_char).collect();
        assert_eq!(distinct, "DELOPRV");
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("json").unwrap();
        assert_eq!(format!("{word}"), "JSON");
    }
}
