//! Display functions for command results

use super::formatters::{attempts_hearts, create_progress_bar};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::game::{ATTEMPT_BUDGET, GuessOutcome};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        let verdict = match step.outcome {
            GuessOutcome::Correct { occurrences } => format!("✓ x{occurrences}").green(),
            GuessOutcome::Wrong => "✗".to_string().red(),
            GuessOutcome::AlreadyGuessed | GuessOutcome::GameOver => "·".to_string().dimmed(),
        };
        println!(
            "\nTurn {:>2}: {}  {}  {}",
            turn,
            step.letter.to_string().bold(),
            verdict,
            step.masked
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Attempts:   {}", attempts_hearts(step.attempts_remaining));
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses ({} wrong)",
                result.steps.len(),
                result.wrong_guesses
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Hanged after {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate).bright_yellow().bold()
    );
    println!("   Wins:             {}", format!("{}", result.wins).green());
    println!("   Losses:           {}", format!("{}", result.losses).red());
    println!("   Average wrong:    {:.2}", result.average_wrong);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Wrong-guess distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for wrong in 0..=usize::from(ATTEMPT_BUDGET) {
        let count = result.distribution.get(&wrong).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        let label = if wrong == usize::from(ATTEMPT_BUDGET) {
            format!("{wrong} ✗").red()
        } else {
            format!("{wrong}  ").normal()
        };
        println!("   {label} [{}] {count}", bar.green());
    }

    if !result.hardest_words.is_empty() {
        println!("\n💀 {}", "Lost words:".bright_red().bold());
        for word in &result.hardest_words {
            println!("   • {word}");
        }
    }
}
