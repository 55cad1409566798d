//! Benchmark command
//!
//! Tests solver performance across multiple words.

use crate::core::SecretWord;
use crate::game::Session;
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub average_wrong: f64,
    /// Number of games that ended with a given count of wrong guesses
    pub distribution: HashMap<usize, usize>,
    pub hardest_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Outcome of one auto-played game
struct GameRun {
    word: String,
    won: bool,
    wrong: usize,
}

fn play<S: Strategy>(solver: &Solver<S>, target: &SecretWord) -> GameRun {
    let mut session = Session::new(target.clone());

    while !session.is_over() {
        match solver.next_guess(&session) {
            Some(letter) => {
                session.guess(letter);
            }
            None => break,
        }
    }

    GameRun {
        word: target.text().to_string(),
        won: session.did_win(),
        wrong: session.wrong().len(),
    }
}

/// Run benchmark on a set of target words
///
/// Games are independent and run in parallel. When `progress` is true an
/// indicatif bar tracks completed games.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    target_words: &[SecretWord],
    progress: bool,
) -> BenchmarkResult {
    let pb = if progress {
        let pb = ProgressBar::new(target_words.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .expect("valid progress template")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let runs: Vec<GameRun> = target_words
        .par_iter()
        .map(|target| {
            let run = play(solver, target);
            pb.inc(1);
            run
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_with_message("done");

    let total_words = runs.len();
    let wins = runs.iter().filter(|r| r.won).count();
    let total_wrong: usize = runs.iter().map(|r| r.wrong).sum();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for run in &runs {
        *distribution.entry(run.wrong).or_insert(0) += 1;
    }

    let hardest_words = runs
        .iter()
        .filter(|r| !r.won)
        .map(|r| r.word.clone())
        .collect();

    let ratio = |n: usize| {
        if total_words == 0 {
            0.0
        } else {
            n as f64 / total_words as f64
        }
    };

    BenchmarkResult {
        total_words,
        wins,
        losses: total_words - wins,
        win_rate: ratio(wins) * 100.0,
        average_wrong: ratio(total_wrong),
        distribution,
        hardest_words,
        duration,
        words_per_second: if duration.as_secs_f64() > 0.0 {
            total_words as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}
