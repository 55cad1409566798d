//! Hangman game state machine
//!
//! `Session` holds one play-through; `GameEngine` owns the active session and
//! replaces it on restart.

mod engine;
mod gallows;
mod session;

pub use engine::{EngineError, GameEngine};
pub use gallows::{BASE_LINES, GALLOWS_ART, gallows_lines};
pub use session::{GuessOutcome, Session, Status};

/// Wrong guesses allowed before the game is lost
pub const ATTEMPT_BUDGET: u8 = 6;
