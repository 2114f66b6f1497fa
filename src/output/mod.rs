// Colored terminal output for analysis results and history listings.
//
// This module handles all terminal-specific formatting; the main.rs
// display calls delegate here.

use colored::Colorize;

use crate::analysis::pipeline::AnalysisResult;
use crate::db::models::StoredResult;

/// Display one analysis as a ranked frequency table.
pub fn display_result(result: &AnalysisResult) {
    println!(
        "\n{}",
        format!("=== Word frequency: {} ===", result.topic).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<24} {:>6}",
        "Rank".dimmed(),
        "Word".dimmed(),
        "Count".dimmed()
    );
    println!("  {}", "-".repeat(40).dimmed());

    for (i, entry) in result.word_frequency.iter().enumerate() {
        println!("  {:>4}. {:<24} {:>6}", i + 1, entry.word, entry.count);
    }
    println!();
}

/// Display a page of stored analyses, newest first.
pub fn display_history(results: &[StoredResult], page: u32, total_pages: u64) {
    if results.is_empty() {
        println!("No stored analyses on this page. Run `wordfreq analyze <topic>` first.");
        return;
    }

    println!(
        "\n{}",
        format!("=== History (page {page} of {total_pages}) ===").bold()
    );
    println!();

    for stored in results {
        let top: Vec<String> = stored
            .word_frequency
            .iter()
            .take(3)
            .map(|e| format!("{} ({})", e.word, e.count))
            .collect();
        println!(
            "  {}  {:<28} {}",
            stored.created_at.dimmed(),
            stored.topic,
            top.join(", ")
        );
    }
    println!();
}
