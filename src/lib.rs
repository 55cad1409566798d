//! Hangman
//!
//! Terminal hangman with an on-screen alphabet, an ASCII gallows and a
//! letter-guessing solver.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Letter, SecretWord};
//! use hangman::game::{GameEngine, Status};
//!
//! let words = vec![SecretWord::new("code").unwrap()];
//! let mut engine = GameEngine::seeded(words, 7).unwrap();
//!
//! for c in ['C', 'O', 'D', 'E'] {
//!     engine.guess_letter(Letter::new(c).unwrap());
//! }
//! assert_eq!(engine.status(), Status::Won);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
