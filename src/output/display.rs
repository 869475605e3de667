//! Display functions for command results

use super::formatters::{create_progress_bar, format_path, path_steps};
use crate::commands::{BenchmarkResult, CheckResult, WordListResult};
use crate::core::{Board, Cell};
use colored::Colorize;

/// Print the board as a letter grid, numbering the cells of `highlight`
pub fn print_board(board: &Board, highlight: &[Cell]) {
    let size = board.size();
    let steps = path_steps(size, highlight);
    let rule = "─".repeat(size * 4 + 1);

    println!("{}", rule.cyan());
    for (row, letters) in board.rows().enumerate() {
        let mut line = String::from(" ");
        for (col, &letter) in letters.iter().enumerate() {
            let text = (letter as char).to_string();
            let cell = match steps[row * size + col] {
                Some(step) => format!(
                    "{}{}",
                    text.bright_yellow().bold(),
                    format!("{step:<2}").dimmed()
                ),
                None => format!("{text}  "),
            };
            line.push_str(&cell);
            line.push(' ');
        }
        println!("{}", line.trim_end());
    }
    println!("{}", rule.cyan());
}

/// Print the outcome of checking words against a board
pub fn print_check_results(board: &Board, results: &[CheckResult], show_boards: bool) {
    println!();
    for result in results {
        if result.found {
            println!(
                "{} {}  {}",
                "✔".green().bold(),
                result.word.bright_yellow().bold(),
                format_path(&result.path).dimmed()
            );
            if show_boards {
                print_board(board, &result.path);
            }
        } else {
            println!(
                "{} {}  {}",
                "✘".red().bold(),
                result.word.to_uppercase(),
                "not on this board".bright_black()
            );
        }
    }

    let found = results.iter().filter(|r| r.found).count();
    println!("\n{found}/{} found", results.len());
}

/// Print the words found on a board
pub fn print_word_list(result: &WordListResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORDS FOUND:".bright_cyan().bold(),
        result.words.len().to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let shown = limit.unwrap_or(result.words.len());
    for found in result.words.iter().take(shown) {
        println!("  {:<12} {}", found.word(), format_path(found.path()).dimmed());
    }
    if shown < result.words.len() {
        println!("  … {} more", result.words.len() - shown);
    }

    if let Some(longest) = result.longest() {
        println!(
            "\nLongest: {} ({} letters)",
            longest.word().green().bold(),
            longest.len()
        );
    }
    println!("Time taken: {:.2}ms", result.duration.as_secs_f64() * 1000.0);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Board size:       {0}×{0}", result.size);
    println!("   Boards searched:  {}", result.total_boards);
    println!("   Words found:      {}", result.total_words);
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest:           {}",
        result.min_words.to_string().yellow()
    );
    println!(
        "   Most:             {}",
        result.max_words.to_string().green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if let Some((literal, count)) = &result.richest_board {
        println!("   Richest board:    {literal} ({count} words)");
    }
    if let Some(word) = &result.longest_word {
        println!("   Longest word:     {}", word.green().bold());
    }

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Word lengths:".bright_cyan().bold());
    let mut lengths: Vec<_> = result.length_distribution.iter().collect();
    lengths.sort_unstable();
    for (&len, &count) in lengths {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {len:2}: {} {count:6} ({pct:5.1}%)", bar.green());
    }
}
