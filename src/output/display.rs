//! Display functions for command results

use super::formatters::{correct_mask, format_constraints, percent_bar};
use crate::commands::{DictionaryStats, FilterResult, SnapshotSummary};
use crate::constraints::ConstraintSet;
use crate::scoring::{LetterDistribution, Ranking};
use colored::Colorize;

/// Letters shown in the distribution panel
const TOP_LETTERS: usize = 10;

fn header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print the active constraints
pub fn print_constraints(constraints: &ConstraintSet) {
    println!(
        "🔒 {}  {}",
        correct_mask(constraints).bright_green().bold(),
        format_constraints(constraints).bright_black()
    );
}

/// Print the most common letters of a distribution
pub fn print_distribution(distribution: &LetterDistribution) {
    if distribution.is_empty() {
        return;
    }
    println!("\n📈 {}", "Letters:".bright_cyan().bold());
    for (letter, percent) in distribution.ranked().into_iter().take(TOP_LETTERS) {
        println!(
            "   {} {} {percent:5.1}%",
            letter.to_string().bright_yellow().bold(),
            percent_bar(percent, 30).green()
        );
    }
}

/// Print up to `limit` ranked candidates
pub fn print_ranking(ranking: &Ranking<'_>, limit: usize) {
    if ranking.is_empty() {
        println!("{}", "No words match.".red().bold());
        return;
    }

    let shown = ranking.page(0, limit);
    for (i, entry) in shown.iter().enumerate() {
        let rank = format!("{:3}.", i + 1);
        let frequency = if entry.frequency > 0.0 {
            format!("  freq {:.2}", entry.frequency)
        } else {
            String::new()
        };
        println!(
            "   {} {}  {}{}",
            rank.bright_black(),
            entry.word.bright_white().bold(),
            format!("{:6.1}", entry.score).bright_yellow(),
            frequency.bright_black()
        );
    }

    if ranking.len() > shown.len() {
        println!(
            "   {}",
            format!("… and {} more", ranking.len() - shown.len()).bright_black()
        );
    }
    if ranking.used_baseline {
        println!(
            "   {}",
            "(scored against the baseline letter table)".bright_black()
        );
    }
}

/// Print the result of the filter command
pub fn print_filter_result(result: &FilterResult<'_>, limit: usize) {
    header("MATCHING WORDS");
    print_constraints(&result.constraints);
    println!(
        "\n🔎 {} candidates, sorted by {}",
        result.ranking.len().to_string().bright_yellow().bold(),
        result.strategy.name().cyan()
    );
    print_ranking(&result.ranking, limit);
    print_distribution(&result.ranking.distribution);
}

/// Print dictionary statistics
pub fn print_stats(stats: &DictionaryStats) {
    header("DICTIONARY");
    println!(
        "\n📚 {} words",
        stats.total_words.to_string().bright_yellow().bold()
    );

    println!("\n📏 {}", "By length:".bright_cyan().bold());
    let largest = stats.by_length.iter().map(|&(_, n)| n).max().unwrap_or(0);
    for &(length, count) in &stats.by_length {
        let bar = super::formatters::create_progress_bar(count as f64, largest as f64, 30);
        let line = format!("   {length:2}: {bar} {count}");
        if length == stats.size {
            println!("{}", line.bright_green());
        } else {
            println!("{line}");
        }
    }

    if stats.distribution.is_empty() {
        println!(
            "\n{}",
            format!("No {}-letter words.", stats.size).yellow()
        );
    } else {
        print_distribution(&stats.distribution);
    }
}

/// Print the outcome of writing a snapshot
pub fn print_snapshot_summary(summary: &SnapshotSummary, path: &std::path::Path) {
    println!(
        "{} {} words, {} bytes → {} in {:.2}s",
        "✅".green(),
        summary.words,
        summary.bytes,
        path.display().to_string().bright_white(),
        summary.duration.as_secs_f64()
    );
}
