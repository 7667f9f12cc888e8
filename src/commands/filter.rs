//! Puzzle filtering command
//!
//! Applies the constraint filter to a dictionary and optionally persists the
//! result as a derived puzzle file.

use crate::core::Puzzle;
use crate::pipeline::{export_to_file, select};
use crate::wordlists::load_from_file;
use anyhow::Result;
use std::path::PathBuf;

/// Configuration for a filter run
pub struct FilterConfig {
    /// The required (central) letter, exactly one character
    pub required: String,
    /// The optional letters around it
    pub optional: Vec<char>,
    pub input: PathBuf,
    /// When set, the filtered list is exported here
    pub output: Option<PathBuf>,
    pub min_length: usize,
}

/// Result of a filter run
pub struct FilterReport {
    pub puzzle: Puzzle,
    /// Matching words, lowercase, in dictionary order
    pub words: Vec<String>,
    /// The subset of matches using every allowed letter
    pub pangrams: Vec<String>,
    pub output_bytes: Option<u64>,
}

/// Filter a dictionary by puzzle constraints
///
/// # Errors
///
/// Returns an error if the required letter is not exactly one character, if
/// the dictionary cannot be loaded, or if the output file cannot be written.
pub fn run_filter(config: &FilterConfig) -> Result<FilterReport> {
    let puzzle = Puzzle::new(&config.required, &config.optional)?;
    let words = load_from_file(&config.input)?;

    let matched = select(&puzzle, &words, config.min_length);
    let pangrams: Vec<String> = matched
        .iter()
        .filter(|word| puzzle.is_pangram(word))
        .cloned()
        .collect();

    let output_bytes = match &config.output {
        Some(path) => Some(export_to_file(&matched, path)?),
        None => None,
    };

    Ok(FilterReport {
        puzzle,
        words: matched,
        pangrams,
        output_bytes,
    })
}
