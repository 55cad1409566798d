//! The gallows drawing
//!
//! Seven fixed lines of ASCII art. The first two (the beam) are always shown
//! and every wrong guess uncovers one more line.

/// Every line of the finished drawing, top to bottom
pub const GALLOWS_ART: [&str; 7] = [
    "  ____",
    "  |  |",
    "  |  O",
    "  | /|\\",
    "  |  |",
    "  | / \\",
    "__|__",
];

/// Lines visible before any wrong guess
pub const BASE_LINES: usize = 2;

/// The lines to draw for a gallows stage
///
/// # Examples
/// ```
/// use hangman::game::gallows_lines;
///
/// assert_eq!(gallows_lines(0), ["  ____", "  |  |"]);
/// assert_eq!(gallows_lines(6).len(), 7);
/// ```
#[must_use]
pub fn gallows_lines(stage: u8) -> &'static [&'static str] {
    let visible = (BASE_LINES + usize::from(stage)).min(GALLOWS_ART.len());
    &GALLOWS_ART[..visible]
}
