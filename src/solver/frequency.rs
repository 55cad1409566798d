//! Letter-frequency selection
//!
//! Picks the unguessed letter that appears in the most remaining candidates.
//! A letter found in many candidates either reveals a lot or rules a lot out.

use super::strategy::Strategy;
use crate::core::{Letter, LetterSet, SecretWord};
use rayon::prelude::*;

/// English letter order from most to least common, used when no candidate remains
pub const ENGLISH_ORDER: &str = "ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// Most-common-letter strategy
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_letter(&self, candidates: &[&SecretWord], guessed: LetterSet) -> Option<Letter> {
        let counts = letter_counts(candidates);

        let mut best: Option<(Letter, usize)> = None;
        for letter in Letter::ALPHABET {
            let count = counts[letter.index()];
            if guessed.contains(letter) || count == 0 {
                continue;
            }
            // Strict comparison keeps the earliest letter on ties
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((letter, count));
            }
        }

        best.map(|(letter, _)| letter)
            .or_else(|| english_fallback(guessed))
    }
}

/// Count, for each letter, how many candidates contain it at least once
///
/// # Examples
/// ```
/// use hangman::core::{Letter, SecretWord};
/// use hangman::solver::letter_counts;
///
/// let words = [SecretWord::new("HTML").unwrap(), SecretWord::new("CSS").unwrap()];
/// let refs: Vec<&SecretWord> = words.iter().collect();
///
/// let counts = letter_counts(&refs);
/// assert_eq!(counts[Letter::new('S').unwrap().index()], 1);
/// assert_eq!(counts[Letter::new('H').unwrap().index()], 1);
/// assert_eq!(counts[Letter::new('Q').unwrap().index()], 0);
/// ```
#[must_use]
pub fn letter_counts(candidates: &[&SecretWord]) -> [usize; 26] {
    candidates
        .par_iter()
        .fold(
            || [0usize; 26],
            |mut acc, word| {
                for letter in word.distinct_letters().iter() {
                    acc[letter.index()] += 1;
                }
                acc
            },
        )
        .reduce(
            || [0usize; 26],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        )
}

fn english_fallback(guessed: LetterSet) -> Option<Letter> {
    ENGLISH_ORDER
        .chars()
        .filter_map(|c| Letter::new(c).ok())
        .find(|&letter| !guessed.contains(letter))
}
