//! Formatting utilities for terminal output

use crate::core::Letter;
use crate::game::ATTEMPT_BUDGET;

/// Join letters as `A, B, C`, or `None` when empty
#[must_use]
pub fn letter_list(letters: &[Letter]) -> String {
    if letters.is_empty() {
        return "None".to_string();
    }
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Remaining attempts as filled and empty hearts
#[must_use]
pub fn attempts_hearts(remaining: u8) -> String {
    let remaining = remaining.min(ATTEMPT_BUDGET);
    format!(
        "{}{}",
        "♥".repeat(usize::from(remaining)),
        "♡".repeat(usize::from(ATTEMPT_BUDGET - remaining))
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_list_empty() {
        assert_eq!(letter_list(&[]), "None");
    }

    #[test]
    fn letter_list_keeps_guess_order() {
        let letters: Vec<Letter> = "ZEA".chars().map(|c| Letter::new(c).unwrap()).collect();
        assert_eq!(letter_list(&letters), "Z, E, A");
    }

    #[test]
    fn hearts_full_and_empty() {
        assert_eq!(attempts_hearts(6), "♥♥♥♥♥♥");
        assert_eq!(attempts_hearts(0), "♡♡♡♡♡♡");
        assert_eq!(attempts_hearts(4), "♥♥♥♥♡♡");
        assert_eq!(attempts_hearts(200), "♥♥♥♥♥♥");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
