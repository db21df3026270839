//! Display functions for command results

use super::formatters::{PRINT_WIDTH, create_progress_bar, ladder_lines};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the number of usable dictionary words
pub fn print_words_read(count: usize) {
    println!("{} words read", count.to_string().bright_cyan());
}

/// Print the result of solving a ladder
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.text().to_uppercase().bright_yellow().bold(),
        result.end.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.ladder {
        Some(ladder) => {
            println!();
            for line in ladder_lines(ladder, PRINT_WIDTH) {
                println!("{line}");
            }
            println!(
                "\n{}",
                format!("✅ {} words, {} steps", ladder.len(), ladder.steps())
                    .green()
                    .bold()
            );
        }
        None => {
            println!(
                "\n{}",
                "No ladder possible between these words!".red().bold()
            );
        }
    }

    if verbose {
        println!("\n  Words of this length: {}", result.candidates);
        println!("  Letters differing:    {}", result.letters_differing);
        println!("  Nodes expanded:       {}", result.stats.expanded);
        println!("  Nodes discovered:     {}", result.stats.discovered);
    }
    println!();
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!(
        "   Dictionary:       {} words of length {}",
        result.dictionary_size, result.word_length
    );
    println!("   Pairs searched:   {}", result.pairs);
    println!(
        "   Reachable:        {}",
        format!("{}", result.reachable).green()
    );
    println!(
        "   Unreachable:      {}",
        format!("{}", result.unreachable).yellow()
    );
    println!(
        "   Average length:   {}",
        format!("{:.2}", result.average_len).bright_yellow().bold()
    );
    println!("   Shortest ladder:  {}", result.min_len);
    println!("   Longest ladder:   {}", result.max_len);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.searches_per_second);

    if result.reachable == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&len, &count) in &result.distribution {
        let pct = (count as f64 / result.reachable as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {len:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
