//! Hangman - CLI
//!
//! Terminal hangman with TUI and text modes, plus a solver that plays by itself.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::{SolveConfig, run_benchmark, run_simple, solve_word},
    core::SecretWord,
    game::GameEngine,
    interactive::{App, run_tui},
    logging::{self, LogTarget},
    output::{print_benchmark_result, print_solve_result},
    solver::{Solver, Strategy, StrategyType},
    wordlists::{WORDS, loader::words_from_slice},
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal hangman with an on-screen alphabet and a letter-guessing solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: frequency (default), alphabetical, random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Wordlist: 'default' (built-in list) or path to file
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Seed the word draw for a reproducible game
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (no TUI)
    Simple,

    /// Let the solver play a specific word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of words to test (default: whole list)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

/// Load the word list based on the -w flag
///
/// - "default": the built-in list
/// - "<path>": one word per line
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<SecretWord>> {
    use hangman::wordlists::loader::load_from_file;

    match wordlist_mode {
        "default" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let target = match command {
        Commands::Play => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    logging::init(target)?;

    let words = load_wordlist(&cli.wordlist)?;
    info!(words = words.len(), wordlist = %cli.wordlist, "word list loaded");

    match command {
        Commands::Play => run_play_command(words, cli.seed),
        Commands::Simple => run_simple_command(words, cli.seed),
        Commands::Solve { word, verbose } => {
            run_solve_command(&cli.strategy, &word, verbose, &words)
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(&cli.strategy, count, &words);
            Ok(())
        }
    }
}

fn build_engine(words: Vec<SecretWord>, seed: Option<u64>) -> Result<GameEngine> {
    let engine = match seed {
        Some(seed) => GameEngine::seeded(words, seed)?,
        None => GameEngine::from_os_rng(words)?,
    };
    Ok(engine)
}

fn run_play_command(words: Vec<SecretWord>, seed: Option<u64>) -> Result<()> {
    let engine = build_engine(words, seed)?;
    run_tui(App::new(engine))
}

fn run_simple_command(words: Vec<SecretWord>, seed: Option<u64>) -> Result<()> {
    let mut engine = build_engine(words, seed)?;
    run_simple(&mut engine).map_err(|e| anyhow::anyhow!(e))
}

fn run_solve_command(
    strategy_name: &str,
    word: &str,
    verbose: bool,
    words: &[SecretWord],
) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    let solver = Solver::new(strategy, words);
    solve_command(word, verbose, &solver)
}

fn solve_command<S: Strategy>(word: &str, verbose: bool, solver: &Solver<S>) -> Result<()> {
    let config = SolveConfig::new(word.to_string());
    let result = solve_word(config, solver).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(strategy_name: &str, count: Option<usize>, words: &[SecretWord]) {
    let strategy = StrategyType::from_name(strategy_name);
    println!(
        "Running benchmark with the {} strategy...",
        strategy.name()
    );

    let solver = Solver::new(strategy, words);
    let targets = &words[..count.unwrap_or(words.len()).min(words.len())];

    let result = run_benchmark(&solver, targets, true);
    print_benchmark_result(&result);
}
