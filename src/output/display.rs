//! Display functions for command results

use super::formatters::{create_progress_bar, rejection_message, rejection_title};
use crate::commands::{CheckResult, RootRanking, SolutionsResult};
use crate::core::Verdict;
use colored::Colorize;

/// Print the result of checking a single word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root: {}   Word: {}",
        result.root.to_uppercase().bright_yellow().bold(),
        result.input.to_uppercase().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match result.verdict {
        None => println!("\n{}", "Nothing to check: the word is empty.".bright_black()),
        Some(Verdict::Accepted { score_delta }) => {
            println!(
                "\n{}",
                format!("✅ Accepted for {score_delta} points").green().bold()
            );
        }
        Some(Verdict::Rejected { reason }) => {
            println!("\n{}", format!("❌ {}", rejection_title(reason)).red().bold());
            println!("   {}", rejection_message(reason, &result.root));
        }
    }
}

/// Print every attainable word for a root
pub fn print_solutions(result: &SolutionsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.solutions.is_empty() {
        println!("\nNo attainable words.");
        return;
    }

    let mut current_score = None;
    for solution in &result.solutions {
        if current_score != Some(solution.score) {
            current_score = Some(solution.score);
            println!(
                "\n{}",
                format!("{} points:", solution.score).bright_cyan().bold()
            );
        }
        println!("  • {}", solution.word);
    }

    println!(
        "\n📊 {} words, {} points available",
        result.solutions.len().to_string().bright_yellow().bold(),
        result.max_score.to_string().bright_yellow().bold()
    );
}

/// Print root words ranked by attainable words
pub fn print_rankings(rankings: &[RootRanking], top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD RANKING".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let best = rankings.first().map_or(0, |r| r.attainable);

    println!();
    for (i, ranking) in rankings.iter().take(top).enumerate() {
        let bar = create_progress_bar(ranking.attainable as f64, best as f64, 30);
        println!(
            "  {:>3}. {:<12} [{}] {:>4} words {:>5} pts",
            i + 1,
            ranking.root.to_uppercase(),
            bar.green(),
            ranking.attainable,
            ranking.max_score
        );
    }

    if rankings.len() > top {
        println!(
            "\n  {}",
            format!("... and {} more", rankings.len() - top).bright_black()
        );
    }
}
