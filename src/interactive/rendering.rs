//! TUI rendering with ratatui
//!
//! Draws the gallows, the masked word, and the on-screen alphabet.

use super::app::{App, KEYBOARD_COLUMNS, KeyState, MessageStyle};
use crate::core::Letter;
use crate::game::{ATTEMPT_BUDGET, gallows_lines};
use crate::output::formatters::{attempts_hearts, letter_list};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows and guesses
            Constraint::Percentage(60), // Word and keyboard
        ])
        .split(chunks[1]);

    render_left_panel(f, app, main_chunks[0]);
    render_right_panel(f, app, main_chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

fn render_left_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Gallows
            Constraint::Length(4), // Guessed letters
        ])
        .split(area);

    render_gallows(f, app, chunks[0]);
    render_guessed(f, app, chunks[1]);
}

fn render_gallows<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let engine = &app.engine;
    let art_style = if engine.is_over() && !engine.did_win() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    };

    let mut lines: Vec<Line> = gallows_lines(engine.gallows_stage())
        .iter()
        .map(|&line| Line::styled(line, art_style))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Errors: {}/{ATTEMPT_BUDGET}",
        engine.wrong().len()
    )));
    lines.push(Line::styled(
        attempts_hearts(engine.attempts_remaining()),
        Style::default().fg(Color::Red),
    ));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_guessed<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Correct: "),
            Span::styled(
                letter_list(app.engine.correct()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::raw("Wrong:   "),
            Span::styled(
                letter_list(app.engine.wrong()),
                Style::default().fg(Color::Red),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(Block::default().title(" Letters ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_right_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Masked word
            Constraint::Length(5), // Keyboard
            Constraint::Min(4),    // Result or help
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
    render_result(f, app, chunks[2]);
}

fn render_word<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let word = Paragraph::new(app.engine.masked_word().to_spaced("  "))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(word, area);
}

fn key_style<R: Rng>(app: &App<R>, letter: Letter) -> Style {
    let base = match app.key_state(letter) {
        KeyState::Correct => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        KeyState::Wrong => Style::default().fg(Color::Red),
        KeyState::Unused if app.engine.is_over() => Style::default().fg(Color::DarkGray),
        KeyState::Unused => Style::default().fg(Color::White),
    };

    if letter == app.selected_letter() && !app.engine.is_over() {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

fn render_keyboard<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let rows: Vec<Line> = Letter::ALPHABET
        .chunks(KEYBOARD_COLUMNS)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&letter| Span::styled(format!(" {letter} "), key_style(app, letter)))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(rows).alignment(Alignment::Center).block(
        Block::default()
            .title(" Alphabet ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_result<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let engine = &app.engine;

    let (title, content, color) = match engine.revealed_word() {
        Some(word) => {
            let (banner, color) = if engine.did_win() {
                ("🎉 Congratulations! You won!", Color::Green)
            } else {
                ("💀 Game over! You lost!", Color::Red)
            };
            (
                " Result ",
                vec![
                    Line::styled(banner, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                    Line::from(vec![
                        Span::raw("The word was: "),
                        Span::styled(
                            word.text().to_string(),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from("Enter/n: New Game | q: Quit"),
                ],
                color,
            )
        }
        None => (
            " How to play ",
            vec![
                Line::from("Type a letter, or pick one with the arrows and press Enter."),
                Line::from(format!(
                    "{ATTEMPT_BUDGET} wrong guesses complete the gallows."
                )),
            ],
            Color::Cyan,
        ),
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let streak_text = format!(
        "Streak: {} (best {})",
        app.stats.current_streak, app.stats.best_streak
    );
    f.render_widget(
        Paragraph::new(streak_text).alignment(Alignment::Center),
        chunks[1],
    );

    let attempts_text = format!("Attempts left: {}", app.engine.attempts_remaining());
    f.render_widget(
        Paragraph::new(attempts_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = if app.engine.is_over() {
        "Esc: Quit | Enter: New Game"
    } else {
        "Esc: Quit | Ctrl+N: New Game"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
