//! Hangman solving algorithms
//!
//! This module contains different letter-picking strategies for Hangman.

mod engine;
pub mod frequency;
pub mod strategy;

pub use engine::Solver;
pub use frequency::{FrequencyStrategy, letter_counts};
pub use strategy::{AlphabeticalStrategy, RandomStrategy, Strategy, StrategyType};
