//! Alphabet letters and letter sets
//!
//! A `Letter` is one of the 26 uppercase ASCII letters. A `LetterSet` packs
//! any subset of the alphabet into a 26-bit mask.

use std::fmt;

/// One uppercase letter `A`-`Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for characters outside the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterError {
    NotAlphabetic(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAlphabetic(c) => write!(f, "'{c}' is not a letter A-Z"),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// The fixed 26-letter alphabet, in order
    pub const ALPHABET: [Self; 26] = {
        let mut letters = [Self(b'A'); 26];
        let mut i = 0;
        while i < 26 {
            letters[i] = Self(b'A' + i as u8);
            i += 1;
        }
        letters
    };

    /// Create a letter from a character, normalizing lowercase
    ///
    /// # Errors
    /// Returns `LetterError::NotAlphabetic` for anything outside `a-z`/`A-Z`.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::new('q').unwrap().as_char(), 'Q');
    /// assert!(Letter::new('7').is_err());
    /// ```
    pub const fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self((c as u8).to_ascii_uppercase()))
        } else {
            Err(LetterError::NotAlphabetic(c))
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Position in the alphabet (0-25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Set of letters stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Insert a letter, returning `true` if it was not already present
    #[inline]
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1 << letter.index();
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate members in alphabet order
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::ALPHABET
            .into_iter()
            .filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_a_to_z() {
        let text: String = Letter::ALPHABET.iter().map(|l| l.as_char()).collect();
        assert_eq!(text, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn letter_normalizes_lowercase() {
        assert_eq!(Letter::new('a').unwrap(), Letter::new('A').unwrap());
        assert_eq!(Letter::new('z').unwrap().index(), 25);
    }

    #[test]
    fn letter_rejects_non_alphabetic() {
        assert_eq!(Letter::new('1'), Err(LetterError::NotAlphabetic('1')));
        assert_eq!(Letter::new(' '), Err(LetterError::NotAlphabetic(' ')));
        assert_eq!(Letter::new('é'), Err(LetterError::NotAlphabetic('é')));
    }

    #[test]
    fn letter_index_matches_alphabet_position() {
        for (i, letter) in Letter::ALPHABET.into_iter().enumerate() {
            assert_eq!(letter.index(), i);
        }
    }

    #[test]
    fn set_insert_reports_new_members() {
        let mut set = LetterSet::new();
        let a = Letter::new('A').unwrap();

        assert!(set.insert(a));
        assert!(!set.insert(a));
        assert_eq!(set.len(), 1);
        assert!(set.contains(a));
    }

    #[test]
    fn set_iterates_in_alphabet_order() {
        let set: LetterSet = "ZEBRA"
            .chars()
            .map(|c| Letter::new(c).unwrap())
            .collect();

        let text: String = set.iter().map(Letter::as_char).collect();
        assert_eq!(text, "ABERZ");
    }

    #[test]
    fn set_subset() {
        let abc: LetterSet = "ABC".chars().map(|c| Letter::new(c).unwrap()).collect();
        let ab: LetterSet = "AB".chars().map(|c| Letter::new(c).unwrap()).collect();

        assert!(ab.is_subset(abc));
        assert!(!abc.is_subset(ab));
        assert!(LetterSet::EMPTY.is_subset(ab));
    }
}
