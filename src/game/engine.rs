//! Game engine interface
//!
//! Owns the word list, the random source, and the single active session.
//! Renderers read the derived views and call the two mutating operations.

use super::session::{GuessOutcome, Session, Status};
use crate::core::{Letter, MaskedWord, SecretWord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::debug;

/// Error type for engine construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    EmptyWordList,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list must contain at least one word"),
        }
    }
}

impl std::error::Error for EngineError {}

/// Main hangman engine
pub struct GameEngine<R: Rng = StdRng> {
    words: Vec<SecretWord>,
    rng: R,
    session: Session,
}

impl GameEngine<StdRng> {
    /// Create an engine seeded from the operating system
    ///
    /// # Errors
    /// Returns `EngineError::EmptyWordList` if `words` is empty.
    pub fn from_os_rng(words: Vec<SecretWord>) -> Result<Self, EngineError> {
        Self::new(words, StdRng::from_os_rng())
    }

    /// Create an engine with a fixed seed for reproducible word draws
    ///
    /// # Errors
    /// Returns `EngineError::EmptyWordList` if `words` is empty.
    pub fn seeded(words: Vec<SecretWord>, seed: u64) -> Result<Self, EngineError> {
        Self::new(words, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine and draw the first session
    ///
    /// # Errors
    /// Returns `EngineError::EmptyWordList` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    /// use hangman::game::GameEngine;
    ///
    /// let words = vec![SecretWord::new("RUST").unwrap()];
    /// let engine = GameEngine::seeded(words, 7).unwrap();
    /// assert_eq!(engine.masked_word().to_string(), "_ _ _ _");
    ///
    /// assert!(GameEngine::seeded(Vec::new(), 7).is_err());
    /// ```
    pub fn new(words: Vec<SecretWord>, mut rng: R) -> Result<Self, EngineError> {
        let secret = draw(&words, &mut rng).ok_or(EngineError::EmptyWordList)?;
        debug!(words = words.len(), word_len = secret.len(), "engine ready");

        Ok(Self {
            session: Session::new(secret),
            words,
            rng,
        })
    }

    /// Replace the session with a fresh one for a randomly drawn word
    pub fn start_new_game(&mut self) {
        if let Some(secret) = draw(&self.words, &mut self.rng) {
            debug!(word_len = secret.len(), "new game started");
            self.session = Session::new(secret);
        }
    }

    /// Guess one letter against the current session
    pub fn guess_letter(&mut self, letter: Letter) -> GuessOutcome {
        self.session.guess(letter)
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn masked_word(&self) -> MaskedWord {
        self.session.masked_word()
    }

    #[must_use]
    pub const fn gallows_stage(&self) -> u8 {
        self.session.gallows_stage()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    #[must_use]
    pub fn did_win(&self) -> bool {
        self.session.did_win()
    }

    #[must_use]
    pub fn correct(&self) -> &[Letter] {
        self.session.correct()
    }

    #[must_use]
    pub fn wrong(&self) -> &[Letter] {
        self.session.wrong()
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.session.attempts_remaining()
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.session.status()
    }

    /// The secret word, only once the game is over
    #[must_use]
    pub fn revealed_word(&self) -> Option<&SecretWord> {
        self.session.revealed_word()
    }
}

/// Uniformly pick one word, or `None` for an empty list
fn draw<R: Rng>(words: &[SecretWord], rng: &mut R) -> Option<SecretWord> {
    if words.is_empty() {
        return None;
    }
    let index = rng.random_range(0..words.len());
    words.get(index).cloned()
}
