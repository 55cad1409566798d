//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with no UI or I/O concerns.
//! All types here are pure and testable in isolation.

mod letter;
mod mask;
mod word;

pub use letter::{Letter, LetterError, LetterSet};
pub use mask::{MaskedWord, PLACEHOLDER};
pub use word::{SecretWord, WordError};
