//! Main Hangman solver interface

use super::strategy::Strategy;
use crate::core::{Letter, LetterSet, SecretWord};
use crate::game::Session;

/// Main Hangman solver
///
/// Narrows the word list to the words consistent with a session and asks its
/// strategy for the next letter.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    words: &'a [SecretWord],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and word list
    pub const fn new(strategy: S, words: &'a [SecretWord]) -> Self {
        Self { strategy, words }
    }

    /// Get the next letter to guess, or `None` once the alphabet is exhausted
    pub fn next_guess(&self, session: &Session) -> Option<Letter> {
        let candidates = self.filter_candidates(session);
        self.strategy.select_letter(&candidates, session.guessed())
    }

    /// Filter the word list to those consistent with the session
    ///
    /// A candidate has the mask's length, matches every revealed slot, holds
    /// no revealed letter in a hidden slot, and contains no wrong letter.
    fn filter_candidates(&self, session: &Session) -> Vec<&'a SecretWord> {
        let mask = session.masked_word();
        let wrong: LetterSet = session.wrong().iter().copied().collect();

        self.words
            .iter()
            .filter(|word| {
                mask.matches(word) && word.letters().iter().all(|&l| !wrong.contains(l))
            })
            .collect()
    }

    /// Count how many candidates remain for the session
    pub fn count_candidates(&self, session: &Session) -> usize {
        self.filter_candidates(session).len()
    }

    /// Get the current candidates (public accessor)
    pub fn get_candidates(&self, session: &Session) -> Vec<&'a SecretWord> {
        self.filter_candidates(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Status;
    use crate::solver::{AlphabeticalStrategy, FrequencyStrategy};

    fn setup_words() -> Vec<SecretWord> {
        ["CODE", "CAKE", "CUBE", "API", "REACT", "HTML", "CSS"]
            .iter()
            .map(|w| SecretWord::new(w).unwrap())
            .collect()
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn fresh_session_filters_by_length() {
        let words = setup_words();
        let solver = Solver::new(FrequencyStrategy, &words);
        let session = Session::new(SecretWord::new("CODE").unwrap());

        let texts: Vec<&str> = solver
            .get_candidates(&session)
            .into_iter()
            .map(SecretWord::text)
            .collect();
        assert_eq!(texts, ["CODE", "CAKE", "CUBE", "HTML"]);
    }

    #[test]
    fn revealed_and_wrong_letters_narrow_candidates() {
        let words = setup_words();
        let solver = Solver::new(FrequencyStrategy, &words);
        let mut session = Session::new(SecretWord::new("CODE").unwrap());

        session.guess(letter('E'));
        // HTML drops out: no E at the end
        assert_eq!(solver.count_candidates(&session), 3);

        session.guess(letter('K'));
        // CAKE drops out: K is wrong
        let texts: Vec<&str> = solver
            .get_candidates(&session)
            .into_iter()
            .map(SecretWord::text)
            .collect();
        assert_eq!(texts, ["CODE", "CUBE"]);
    }

    #[test]
    fn next_guess_never_repeats() {
        let words = setup_words();
        let solver = Solver::new(FrequencyStrategy, &words);
        let mut session = Session::new(SecretWord::new("REACT").unwrap());

        while !session.is_over() {
            let guess = solver.next_guess(&session).unwrap();
            assert!(!session.guessed().contains(guess));
            session.guess(guess);
        }
    }

    #[test]
    fn frequency_solver_wins_with_a_known_list() {
        let words = setup_words();
        let solver = Solver::new(FrequencyStrategy, &words);

        for target in &words {
            let mut session = Session::new(target.clone());
            while let Some(guess) = solver.next_guess(&session) {
                if session.is_over() {
                    break;
                }
                session.guess(guess);
            }
            assert_eq!(session.status(), Status::Won, "failed on {target}");
        }
    }

    #[test]
    fn unknown_word_has_no_candidates_but_still_guesses() {
        let words = setup_words();
        let solver = Solver::new(AlphabeticalStrategy, &words);
        let session = Session::new(SecretWord::new("PYTHONIC").unwrap());

        assert_eq!(solver.count_candidates(&session), 0);
        assert_eq!(solver.next_guess(&session), Some(letter('A')));
    }
}
