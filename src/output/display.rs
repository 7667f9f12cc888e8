//! Display functions for command results

use super::formatters::{format_bytes, reduction_percent};
use crate::commands::{CleanReport, CompressReport, FilterReport};
use colored::Colorize;

/// Print the result of a clean pipeline run
pub fn print_clean_report(report: &CleanReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST CLEANED".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let stats = &report.stats;
    println!("\n🧹 {}", "Cleaning:".bright_cyan().bold());
    println!(
        "   Words:       {} → {}",
        stats.initial,
        stats.kept.to_string().bright_yellow().bold()
    );
    println!("   Removed:     {}", stats.removed);
    println!("   Duplicates:  {}", stats.duplicates);
    if stats.initial > 0 {
        println!(
            "   Kept:        {:.1}%",
            stats.kept as f64 / stats.initial as f64 * 100.0
        );
    }

    println!("\n💾 {}", "Size:".bright_cyan().bold());
    println!("   Input:       {}", format_bytes(report.input_bytes));
    println!(
        "   Output:      {}",
        format_bytes(report.output_bytes).green()
    );

    if !report.sample.is_empty() {
        println!("\n📝 Sample words (first {}):", report.sample.len());
        for word in &report.sample {
            println!("   {word}");
        }
    }
}

/// Print the result of a filter run
pub fn print_filter_report(report: &FilterReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle {}: {} matching words",
        report.puzzle.to_string().bright_yellow().bold(),
        report.words.len().to_string().bright_cyan().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if report.pangrams.is_empty() {
        println!("\nNo pangrams in this puzzle.");
    } else {
        println!("\n🌟 Pangrams ({}):", report.pangrams.len());
        for pangram in &report.pangrams {
            println!("   {}", pangram.to_uppercase().bright_yellow());
        }
    }

    if let Some(bytes) = report.output_bytes {
        println!(
            "\n✅ Exported {} words ({})",
            report.words.len(),
            format_bytes(bytes).green()
        );
    }
}

/// Print the result of a compression run
pub fn print_compress_report(report: &CompressReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "COMPRESSION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📄 Original: {}", report.input.display());
    println!("   Size: {}", format_bytes(report.original_bytes));

    for artifact in &report.artifacts {
        println!(
            "\n✅ {}: {}",
            artifact.codec.name().bright_white().bold(),
            artifact.path.display()
        );
        println!("   Size:      {}", format_bytes(artifact.bytes).green());
        println!(
            "   Reduction: {:.1}%",
            reduction_percent(report.original_bytes, artifact.bytes)
        );
    }

    println!("\n💡 Serve the compressed siblings directly; browsers decompress.");
}
