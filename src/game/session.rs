//! A single play-through
//!
//! The session is the whole mutable game state. It is created for one secret
//! word, mutated only by [`Session::guess`], and thrown away on restart.

use super::ATTEMPT_BUDGET;
use crate::core::{Letter, LetterSet, MaskedWord, SecretWord};
use std::fmt;
use tracing::{info, trace};

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// What a call to [`Session::guess`] did
///
/// `AlreadyGuessed` and `GameOver` are no-ops: the session is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word and was revealed in `occurrences` positions
    Correct { occurrences: usize },
    /// The letter is not in the word and cost one attempt
    Wrong,
    AlreadyGuessed,
    GameOver,
}

impl GuessOutcome {
    /// True when the guess changed the session
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Correct { .. } | Self::Wrong)
    }
}

/// State of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    secret: SecretWord,
    correct: Vec<Letter>,
    wrong: Vec<Letter>,
    guessed: LetterSet,
    attempts_remaining: u8,
    status: Status,
}

impl Session {
    /// Start a fresh session for `secret`
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Letter, SecretWord};
    /// use hangman::game::{Session, Status};
    ///
    /// let mut session = Session::new(SecretWord::new("CODE").unwrap());
    /// session.guess(Letter::new('C').unwrap());
    /// assert_eq!(session.masked_word().to_string(), "C _ _ _");
    ///
    /// for c in ['O', 'D', 'E'] {
    ///     session.guess(Letter::new(c).unwrap());
    /// }
    /// assert_eq!(session.status(), Status::Won);
    /// ```
    #[must_use]
    pub const fn new(secret: SecretWord) -> Self {
        Self {
            secret,
            correct: Vec::new(),
            wrong: Vec::new(),
            guessed: LetterSet::EMPTY,
            attempts_remaining: ATTEMPT_BUDGET,
            status: Status::InProgress,
        }
    }

    /// Apply one guess and re-derive the status
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if self.status != Status::InProgress {
            trace!(%letter, "guess ignored, game over");
            return GuessOutcome::GameOver;
        }
        if self.guessed.contains(letter) {
            trace!(%letter, "guess ignored, already guessed");
            return GuessOutcome::AlreadyGuessed;
        }
        self.guessed.insert(letter);

        let outcome = if self.secret.contains(letter) {
            self.correct.push(letter);
            GuessOutcome::Correct {
                occurrences: self.secret.positions_of(letter).len(),
            }
        } else {
            self.wrong.push(letter);
            self.attempts_remaining -= 1;
            GuessOutcome::Wrong
        };
        trace!(%letter, ?outcome, attempts_remaining = self.attempts_remaining, "guess applied");

        self.update_status();
        outcome
    }

    fn update_status(&mut self) {
        let won = self.secret.distinct_letters().is_subset(self.guessed);
        let lost = self.attempts_remaining == 0;
        // A winning guess is always a correct guess, so it never spends an attempt.
        debug_assert!(!(won && lost), "win and loss reached on the same guess");

        if won {
            self.status = Status::Won;
            info!(word = %self.secret, wrong = self.wrong.len(), "game won");
        } else if lost {
            self.status = Status::Lost;
            info!(word = %self.secret, "game lost");
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Correct letters in the order they were guessed
    #[inline]
    #[must_use]
    pub fn correct(&self) -> &[Letter] {
        &self.correct
    }

    /// Wrong letters in the order they were guessed
    #[inline]
    #[must_use]
    pub fn wrong(&self) -> &[Letter] {
        &self.wrong
    }

    /// Every letter guessed so far, right or wrong
    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn masked_word(&self) -> MaskedWord {
        MaskedWord::reveal(&self.secret, self.guessed)
    }

    /// Number of wrong guesses so far, in `0..=ATTEMPT_BUDGET`
    #[inline]
    #[must_use]
    pub const fn gallows_stage(&self) -> u8 {
        ATTEMPT_BUDGET - self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != Status::InProgress
    }

    #[inline]
    #[must_use]
    pub fn did_win(&self) -> bool {
        self.status == Status::Won
    }

    /// The secret word, only once the game is over
    #[must_use]
    pub fn revealed_word(&self) -> Option<&SecretWord> {
        self.is_over().then_some(&self.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(word: &str) -> Session {
        Session::new(SecretWord::new(word).unwrap())
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn guess_all(session: &mut Session, letters: &str) {
        for c in letters.chars() {
            session.guess(letter(c));
        }
    }

    #[test]
    fn new_session_is_fresh() {
        let s = session("REACT");

        assert_eq!(s.status(), Status::InProgress);
        assert_eq!(s.attempts_remaining(), ATTEMPT_BUDGET);
        assert!(s.correct().is_empty());
        assert!(s.wrong().is_empty());
        assert_eq!(s.gallows_stage(), 0);
        assert!(!s.is_over());
        assert!(s.revealed_word().is_none());
    }

    #[test]
    fn code_is_won_letter_by_letter() {
        let mut s = session("CODE");

        assert_eq!(s.guess(letter('C')), GuessOutcome::Correct { occurrences: 1 });
        assert_eq!(s.masked_word().to_string(), "C _ _ _");
        assert_eq!(s.status(), Status::InProgress);

        guess_all(&mut s, "ODE");
        assert_eq!(s.masked_word().to_string(), "C O D E");
        assert_eq!(s.status(), Status::Won);
        assert!(s.did_win());
        assert_eq!(s.attempts_remaining(), ATTEMPT_BUDGET);
    }

    #[test]
    fn api_is_lost_after_six_wrong_guesses() {
        let mut s = session("API");

        for (i, c) in "ZXQWYV".chars().enumerate() {
            assert_eq!(s.guess(letter(c)), GuessOutcome::Wrong);
            assert_eq!(s.gallows_stage() as usize, i + 1);
        }

        assert_eq!(s.status(), Status::Lost);
        assert_eq!(s.attempts_remaining(), 0);
        assert!(!s.did_win());
        assert_eq!(s.revealed_word().map(SecretWord::text), Some("API"));
    }

    #[test]
    fn repeated_guess_is_a_no_op() {
        let mut s = session("CAT");

        assert_eq!(s.guess(letter('A')), GuessOutcome::Correct { occurrences: 1 });
        let before = s.clone();
        assert_eq!(s.guess(letter('A')), GuessOutcome::AlreadyGuessed);

        assert_eq!(s, before);
        assert_eq!(s.correct(), &[letter('A')]);
        assert_eq!(s.masked_word().to_string(), "_ A _");
    }

    #[test]
    fn repeated_wrong_guess_costs_one_attempt() {
        let mut s = session("CAT");

        s.guess(letter('Z'));
        assert_eq!(s.guess(letter('z')), GuessOutcome::AlreadyGuessed);
        assert_eq!(s.attempts_remaining(), ATTEMPT_BUDGET - 1);
        assert_eq!(s.wrong(), &[letter('Z')]);
    }

    #[test]
    fn guesses_after_win_are_ignored() {
        let mut s = session("CSS");
        guess_all(&mut s, "CS");
        assert_eq!(s.status(), Status::Won);

        let before = s.clone();
        assert_eq!(s.guess(letter('Q')), GuessOutcome::GameOver);
        assert_eq!(s.guess(letter('C')), GuessOutcome::GameOver);
        assert_eq!(s, before);
    }

    #[test]
    fn guesses_after_loss_are_ignored() {
        let mut s = session("API");
        guess_all(&mut s, "ZXQWYV");

        let before = s.clone();
        assert_eq!(s.guess(letter('A')), GuessOutcome::GameOver);
        assert_eq!(s, before);
        assert_eq!(s.status(), Status::Lost);
    }

    #[test]
    fn repeated_letter_counts_every_occurrence() {
        let mut s = session("PROGRAMMING");

        assert_eq!(s.guess(letter('M')), GuessOutcome::Correct { occurrences: 2 });
        assert_eq!(s.masked_word().to_string(), "_ _ _ _ _ _ M M _ _ _");
    }

    #[test]
    fn correct_and_wrong_stay_disjoint() {
        let mut s = session("JAVASCRIPT");
        guess_all(&mut s, "AZJBAZT");

        let correct: LetterSet = s.correct().iter().copied().collect();
        let wrong: LetterSet = s.wrong().iter().copied().collect();

        assert_eq!(correct.len(), s.correct().len());
        assert_eq!(wrong.len(), s.wrong().len());
        assert!(correct.iter().all(|l| !wrong.contains(l)));
        assert_eq!(
            s.attempts_remaining() as usize,
            ATTEMPT_BUDGET as usize - s.wrong().len()
        );
    }

    #[test]
    fn win_on_last_attempt() {
        let mut s = session("API");
        guess_all(&mut s, "ZXQWY");
        assert_eq!(s.attempts_remaining(), 1);

        guess_all(&mut s, "API");
        assert_eq!(s.status(), Status::Won);
        assert_eq!(s.attempts_remaining(), 1);
    }

    #[test]
    fn outcome_acceptance() {
        assert!(GuessOutcome::Wrong.is_accepted());
        assert!(GuessOutcome::Correct { occurrences: 3 }.is_accepted());
        assert!(!GuessOutcome::AlreadyGuessed.is_accepted());
        assert!(!GuessOutcome::GameOver.is_accepted());
    }
}
