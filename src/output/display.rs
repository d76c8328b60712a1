//! Display functions for command results

use super::formatters::{board_lines, create_progress_bar, solution_header, solution_lines};
use crate::commands::{Puzzle, SolveResult, StatsResult};
use crate::core::Board;
use crate::solver::SearchResult;
use colored::Colorize;

/// Print a board, one row per line
pub fn print_board(board: &Board) {
    for line in board_lines(board) {
        println!("{}", line.bright_yellow().bold());
    }
}

/// Print every word found with its paths
pub fn print_solution(result: &SearchResult) {
    println!("{}", solution_header(result).bright_cyan().bold());
    for line in solution_lines(result) {
        println!("{line}");
    }
}

/// Print the result of solving a board
pub fn print_solve_result(solved: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    match solved.generator {
        Some(name) => println!("Board ({name}):"),
        None => println!("Board:"),
    }
    println!("{}", "─".repeat(60).cyan());
    print_board(&solved.board);
    println!("{}", "─".repeat(60).cyan());

    print_solution(&solved.result);

    if verbose {
        println!("\n  Paths:      {}", solved.result.path_count());
        println!(
            "  Time taken: {:.2}ms",
            solved.duration.as_secs_f64() * 1000.0
        );
    }
}

/// Print the result of a statistics run
pub fn print_stats_result(result: &StatsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "STATISTICS:".bright_cyan().bold(),
        result.description.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Solutions:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.boards);
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words).bright_yellow().bold()
    );
    println!(
        "   Fewest:           {}",
        format!("{}", result.min_words).yellow()
    );
    println!(
        "   Most:             {}",
        format!("{}", result.max_words).green()
    );
    println!("   Seed:             {}", result.seed);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if result.boards > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (lower, count) in result.histogram(10) {
            let pct = (count as f64 / result.boards as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {lower:5}+ {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    if let Some(board) = &result.best_board {
        println!(
            "\n🏆 {} ({} words)",
            "Best board:".bright_cyan().bold(),
            result.max_words
        );
        print_board(board);
    }
}

/// Print a side-by-side summary of several statistics runs
pub fn print_comparison(results: &[StatsResult]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATOR COMPARISON".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let best = results
        .iter()
        .map(|r| r.average_words)
        .fold(0.0_f64, f64::max);

    println!(
        "\n   {:<24} {:>9} {:>6} {:>6}",
        "Generator", "Average", "Min", "Max"
    );
    for result in results {
        let bar = create_progress_bar(result.average_words, best, 12);
        println!(
            "   {:<24} {:>9.2} {:>6} {:>6}  {}",
            result.description,
            result.average_words,
            result.min_words,
            result.max_words,
            bar.green()
        );
    }
}

/// Print the puzzles that met the word threshold
pub fn print_puzzles(puzzles: &[Puzzle]) {
    for puzzle in puzzles {
        println!(
            "\n{}",
            format!("=== puzzle {} {}", puzzle.attempt, "=".repeat(50))
                .cyan()
                .bold()
        );
        print_board(&puzzle.board);
        println!("{}", "─".repeat(9));
        print_solution(&puzzle.result);
    }

    if puzzles.is_empty() {
        println!("{}", "No board met the word threshold".yellow());
    }
}

/// Print an indented letter tree, one node per line
pub fn print_tree(lines: &[String]) {
    for line in lines {
        if line.trim_start() == "!" {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }
}

/// Print a list of vocabulary words
pub fn print_words(words: &[String]) {
    for word in words {
        println!("{word}");
    }
    eprintln!("{}", format!("{} words", words.len()).bright_black());
}
