//! TUI application state and logic

use crate::core::Letter;
use crate::game::{GameEngine, GuessOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Letters per row of the on-screen keyboard
pub const KEYBOARD_COLUMNS: usize = 9;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<R: Rng = StdRng> {
    pub engine: GameEngine<R>,
    /// Alphabet index of the selected on-screen key
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results across the games played in this run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
}

impl Statistics {
    fn record(&mut self, won: bool) {
        self.total_games += 1;
        if won {
            self.games_won += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Key state of one on-screen letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Unused,
    Correct,
    Wrong,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(engine: GameEngine<R>) -> Self {
        Self {
            engine,
            cursor: 0,
            messages: vec![Message {
                text: "Welcome! Guess the word one letter at a time.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// The letter under the keyboard cursor
    #[must_use]
    pub fn selected_letter(&self) -> Letter {
        Letter::ALPHABET[self.cursor.min(Letter::ALPHABET.len() - 1)]
    }

    #[must_use]
    pub fn key_state(&self, letter: Letter) -> KeyState {
        let session = self.engine.session();
        if session.correct().contains(&letter) {
            KeyState::Correct
        } else if session.wrong().contains(&letter) {
            KeyState::Wrong
        } else {
            KeyState::Unused
        }
    }

    /// Whether pressing this key would do anything
    #[must_use]
    pub fn is_letter_enabled(&self, letter: Letter) -> bool {
        !self.engine.is_over() && self.key_state(letter) == KeyState::Unused
    }

    pub fn guess(&mut self, letter: Letter) {
        if !self.is_letter_enabled(letter) {
            return;
        }

        match self.engine.guess_letter(letter) {
            GuessOutcome::Correct { occurrences } => {
                let plural = if occurrences == 1 { "" } else { "s" };
                self.add_message(
                    &format!("'{letter}' is in the word ({occurrences} spot{plural})"),
                    MessageStyle::Success,
                );
            }
            GuessOutcome::Wrong => {
                self.add_message(
                    &format!("'{letter}' is not in the word"),
                    MessageStyle::Error,
                );
            }
            GuessOutcome::AlreadyGuessed | GuessOutcome::GameOver => return,
        }

        if self.engine.is_over() {
            let won = self.engine.did_win();
            self.stats.record(won);
            if won {
                self.add_message("🎉 Congratulations! You won!", MessageStyle::Success);
            } else {
                self.add_message("💀 Game over! You lost!", MessageStyle::Error);
            }
            self.add_message("Press Enter or 'n' for a new game.", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        self.engine.start_new_game();
        self.cursor = 0;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Move the keyboard cursor by `delta` keys, clamped to the alphabet
    pub fn move_cursor(&mut self, delta: isize) {
        let last = Letter::ALPHABET.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last few messages
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            _ if self.engine.is_over() => match key.code {
                KeyCode::Enter | KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            },
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Up => self.move_cursor(-(KEYBOARD_COLUMNS as isize)),
            KeyCode::Down => self.move_cursor(KEYBOARD_COLUMNS as isize),
            KeyCode::Enter | KeyCode::Char(' ') => self.guess(self.selected_letter()),
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Ok(letter) = Letter::new(c) {
                    self.cursor = letter.index();
                    self.guess(letter);
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    info!("interactive session started");

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!(
        games = app.stats.total_games,
        won = app.stats.games_won,
        "interactive session ended"
    );
    Ok(())
}
