//! Word solving command
//!
//! Plays a specific target word with the solver and returns the solution path.

use crate::core::{Letter, MaskedWord, SecretWord};
use crate::game::{GuessOutcome, Session, Status};
use crate::solver::{Solver, Strategy};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self { target }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub status: Status,
    pub steps: Vec<GuessStep>,
    pub wrong_guesses: usize,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == Status::Won
    }
}

/// A single guess step in the solution
pub struct GuessStep {
    pub letter: Letter,
    pub outcome: GuessOutcome,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub masked: MaskedWord,
    pub attempts_remaining: u8,
}

/// Solve a specific word using the given solver and strategy
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (empty or contains non-letters)
/// - The solver runs out of letters before the game ends
pub fn solve_word<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, String> {
    let target = SecretWord::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;
    let mut session = Session::new(target);
    let mut steps = Vec::new();

    while !session.is_over() {
        let candidates_before = solver.count_candidates(&session);

        let letter = solver
            .next_guess(&session)
            .ok_or_else(|| "No letters left to guess".to_string())?;
        let outcome = session.guess(letter);

        steps.push(GuessStep {
            letter,
            outcome,
            candidates_before,
            candidates_after: solver.count_candidates(&session),
            masked: session.masked_word(),
            attempts_remaining: session.attempts_remaining(),
        });
    }

    Ok(SolveResult {
        target: session.secret().text().to_string(),
        status: session.status(),
        wrong_guesses: session.wrong().len(),
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{AlphabeticalStrategy, FrequencyStrategy};
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn solve_known_word() {
        let words = words_from_slice(WORDS);
        let solver = Solver::new(FrequencyStrategy, &words);

        let result = solve_word(SolveConfig::new("react".to_string()), &solver).unwrap();

        assert!(result.success());
        assert_eq!(result.target, "REACT");
        assert_eq!(result.steps.last().unwrap().masked.to_spaced(""), "REACT");
    }

    #[test]
    fn steps_track_candidates_and_attempts() {
        let words = words_from_slice(WORDS);
        let solver = Solver::new(FrequencyStrategy, &words);

        let result = solve_word(SolveConfig::new("DATABASE".to_string()), &solver).unwrap();

        for step in &result.steps {
            assert!(step.outcome.is_accepted());
            assert!(step.candidates_after <= step.candidates_before);
        }
        let wrong = result
            .steps
            .iter()
            .filter(|s| s.outcome == GuessOutcome::Wrong)
            .count();
        assert_eq!(wrong, result.wrong_guesses);
    }

    #[test]
    fn alphabetical_loses_on_late_letters() {
        let words = words_from_slice(WORDS);
        let solver = Solver::new(AlphabeticalStrategy, &words);

        // A B C D E F: every one is wrong for "MYSQL"
        let result = solve_word(SolveConfig::new("MYSQL".to_string()), &solver).unwrap();

        assert_eq!(result.status, Status::Lost);
        assert_eq!(result.wrong_guesses, 6);
        assert_eq!(result.steps.len(), 6);
        assert_eq!(result.steps.last().unwrap().attempts_remaining, 0);
    }

    #[test]
    fn invalid_target_is_rejected() {
        let words = words_from_slice(WORDS);
        let solver = Solver::new(FrequencyStrategy, &words);

        assert!(solve_word(SolveConfig::new("node.js".to_string()), &solver).is_err());
        assert!(solve_word(SolveConfig::new(String::new()), &solver).is_err());
    }
}
