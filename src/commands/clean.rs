//! Clean pipeline command
//!
//! The default batch flow: load a raw word list, clean it, export the
//! compact JSON dictionary the game serves.

use crate::pipeline::{CleanOptions, CleanStats, clean, export_to_file};
use crate::wordlists::load_from_file;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// How many cleaned words the report keeps for display
const SAMPLE_SIZE: usize = 10;

/// Configuration for the clean pipeline
pub struct CleanConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub min_length: usize,
}

/// Result of a clean pipeline run
pub struct CleanReport {
    pub stats: CleanStats,
    pub input_bytes: u64,
    pub output_bytes: u64,
    /// First few cleaned words, for eyeballing the output
    pub sample: Vec<String>,
}

/// Run the clean pipeline: load, clean, export
///
/// # Errors
///
/// Returns an error if the input file is missing or malformed, or if the
/// output cannot be written. No partial output is produced on failure.
pub fn run_clean(config: &CleanConfig) -> Result<CleanReport> {
    let raw_words = load_from_file(&config.input)?;
    let input_bytes = fs::metadata(&config.input)
        .with_context(|| format!("failed to stat {}", config.input.display()))?
        .len();

    let options = CleanOptions::with_min_length(config.min_length);
    let (cleaned, stats) = clean(&raw_words, &options);

    let output_bytes = export_to_file(&cleaned, &config.output)?;
    let sample = cleaned.iter().take(SAMPLE_SIZE).cloned().collect();

    Ok(CleanReport {
        stats,
        input_bytes,
        output_bytes,
        sample,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("spellbee-clean-{tag}-{}.json", std::process::id()))
    }

    #[test]
    fn clean_pipeline_end_to_end() {
        let input = temp_path("in");
        let output = temp_path("out");
        fs::write(&input, r#"["Apple","apple","a-b","hi","test"]"#).unwrap();

        let config = CleanConfig {
            input: input.clone(),
            output: output.clone(),
            min_length: 4,
        };
        let report = run_clean(&config).unwrap();

        assert_eq!(report.stats.initial, 5);
        assert_eq!(report.stats.kept, 2);
        assert_eq!(report.sample, vec!["apple", "test"]);

        let written: Vec<String> =
            serde_json::from_slice(&fs::read(&output).unwrap()).unwrap();
        assert_eq!(written, vec!["apple", "test"]);
        assert_eq!(report.output_bytes, fs::metadata(&output).unwrap().len());

        fs::remove_file(&input).unwrap();
        fs::remove_file(&output).unwrap();
    }

    #[test]
    fn clean_pipeline_missing_input_produces_no_output() {
        let output = temp_path("untouched");
        let config = CleanConfig {
            input: PathBuf::from("no/such/raw.json"),
            output: output.clone(),
            min_length: 4,
        };

        assert!(run_clean(&config).is_err());
        assert!(!output.exists());
    }
}
