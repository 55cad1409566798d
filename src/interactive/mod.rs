//! Interactive TUI mode
//!
//! Ratatui front end: gallows, masked word and an on-screen alphabet.

pub mod app;
pub mod rendering;

pub use app::{App, KeyState, Message, MessageStyle, Statistics, run_tui};
