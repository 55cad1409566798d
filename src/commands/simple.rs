//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use crate::core::Letter;
use crate::game::{ATTEMPT_BUDGET, GameEngine, GuessOutcome, gallows_lines};
use crate::output::formatters::letter_list;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<R: Rng>(engine: &mut GameEngine<R>) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(engine, stdin.lock(), stdout.lock()).map_err(|e| format!("I/O error: {e}"))
}

/// Drive a game from line-oriented input
///
/// Each line is a letter to guess, `new` to restart, or `quit` to leave.
/// The loop also ends when input runs out.
///
/// # Errors
///
/// Returns any I/O error from reading `input` or writing `output`.
pub fn play_lines<R: Rng, I: BufRead, O: Write>(
    engine: &mut GameEngine<R>,
    mut input: I,
    mut output: O,
) -> io::Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                     Hangman - Text Mode                      ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Guess the word one letter at a time. {ATTEMPT_BUDGET} wrong guesses and you hang!")?;
    writeln!(output, "Commands: a letter to guess, 'new' for a new game, 'quit' to exit\n")?;

    print_board(engine, &mut output)?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "quit" | "exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                info!("text mode quit");
                return Ok(());
            }
            "new" => {
                engine.start_new_game();
                writeln!(output, "\n🔄 New game started!\n")?;
                print_board(engine, &mut output)?;
            }
            "" => {}
            _ => {
                let mut chars = command.chars();
                let letter = match (chars.next(), chars.next()) {
                    (Some(c), None) => Letter::new(c).ok(),
                    _ => None,
                };

                let Some(letter) = letter else {
                    writeln!(output, "Type a single letter A-Z, 'new' or 'quit'.")?;
                    continue;
                };

                match engine.guess_letter(letter) {
                    GuessOutcome::Correct { occurrences } => {
                        writeln!(output, "✅ '{letter}' is in the word ({occurrences}x)!")?;
                    }
                    GuessOutcome::Wrong => {
                        writeln!(output, "❌ '{letter}' is not in the word.")?;
                    }
                    GuessOutcome::AlreadyGuessed => {
                        writeln!(output, "You already tried '{letter}'.")?;
                        continue;
                    }
                    GuessOutcome::GameOver => {
                        writeln!(output, "The game is over. Type 'new' to play again.")?;
                        continue;
                    }
                }
                print_board(engine, &mut output)?;
            }
        }
    }

    Ok(())
}

fn print_board<R: Rng, O: Write>(engine: &GameEngine<R>, output: &mut O) -> io::Result<()> {
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    for line in gallows_lines(engine.gallows_stage()) {
        writeln!(output, "{line}")?;
    }
    writeln!(output)?;
    writeln!(output, "Word:    {}", engine.masked_word().to_spaced("   "))?;
    writeln!(output, "Wrong:   {}", letter_list(engine.wrong()))?;
    writeln!(
        output,
        "Errors:  {}/{ATTEMPT_BUDGET}",
        engine.wrong().len()
    )?;

    if let Some(word) = engine.revealed_word() {
        writeln!(output)?;
        if engine.did_win() {
            writeln!(output, "🎉 Congratulations! You won!")?;
        } else {
            writeln!(output, "💀 Game over! You lost!")?;
        }
        writeln!(output, "The word was: {word}")?;
        writeln!(output, "Type 'new' to play again or 'quit' to exit.")?;
    }
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;
    use crate::game::Status;

    fn engine(word: &str) -> GameEngine {
        GameEngine::seeded(vec![SecretWord::new(word).unwrap()], 1).unwrap()
    }

    fn run(engine: &mut GameEngine, script: &str) -> String {
        let mut out = Vec::new();
        play_lines(engine, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn winning_script() {
        let mut engine = engine("CODE");
        let out = run(&mut engine, "c\no\nd\ne\n");

        assert_eq!(engine.status(), Status::Won);
        assert!(out.contains("You won!"));
        assert!(out.contains("The word was: CODE"));
    }

    #[test]
    fn losing_script_reveals_word() {
        let mut engine = engine("API");
        let out = run(&mut engine, "z\nx\nq\nw\ny\nv\n");

        assert_eq!(engine.status(), Status::Lost);
        assert_eq!(engine.attempts_remaining(), 0);
        assert!(out.contains("You lost!"));
        assert!(out.contains("The word was: API"));
        assert!(out.contains("Errors:  6/6"));
    }

    #[test]
    fn invalid_and_repeated_input_is_ignored() {
        let mut engine = engine("CAT");
        let out = run(&mut engine, "a\na\n7\nhello\n\n");

        assert_eq!(engine.correct().len(), 1);
        assert!(engine.wrong().is_empty());
        assert!(out.contains("You already tried 'A'."));
        assert!(out.contains("Type a single letter"));
    }

    #[test]
    fn new_resets_and_quit_stops() {
        let mut engine = engine("CAT");
        run(&mut engine, "z\nnew\nquit\nx\n");

        // 'x' after quit is never read
        assert!(engine.wrong().is_empty());
        assert_eq!(engine.status(), Status::InProgress);
    }
}
