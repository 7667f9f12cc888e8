//! Compression command
//!
//! Wraps an exported dictionary in the compressed siblings a web server can
//! deliver directly.

use crate::pipeline::{Artifact, Codec, compress_file};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Configuration for a compression run
pub struct CompressConfig {
    pub input: PathBuf,
    /// Whether to produce the brotli artifact alongside gzip
    pub brotli: bool,
}

/// Result of a compression run
pub struct CompressReport {
    pub input: PathBuf,
    pub original_bytes: u64,
    pub artifacts: Vec<Artifact>,
}

/// Compress a file with gzip, and optionally brotli
///
/// # Errors
///
/// Returns an error if the input file is missing or an artifact cannot be
/// written.
pub fn run_compress(config: &CompressConfig) -> Result<CompressReport> {
    let original_bytes = fs::metadata(&config.input)
        .with_context(|| format!("file not found: {}", config.input.display()))?
        .len();

    let codecs: &[Codec] = if config.brotli {
        &Codec::ALL
    } else {
        &[Codec::Gzip]
    };

    let artifacts = compress_file(&config.input, codecs)?;

    Ok(CompressReport {
        input: config.input.clone(),
        original_bytes,
        artifacts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("spellbee-cmd-compress-{tag}-{}.json", std::process::id()))
    }

    #[test]
    fn compress_produces_both_artifacts_by_default() {
        let input = temp_path("both");
        fs::write(&input, br#"["one","two","three","four"]"#).unwrap();

        let config = CompressConfig {
            input: input.clone(),
            brotli: true,
        };
        let report = run_compress(&config).unwrap();

        assert_eq!(report.artifacts.len(), 2);
        assert_eq!(report.artifacts[0].codec, Codec::Gzip);
        assert_eq!(report.artifacts[1].codec, Codec::Brotli);
        assert_eq!(report.original_bytes, fs::metadata(&input).unwrap().len());

        for artifact in &report.artifacts {
            assert!(artifact.path.exists());
            fs::remove_file(&artifact.path).unwrap();
        }
        fs::remove_file(&input).unwrap();
    }

    #[test]
    fn compress_can_skip_brotli() {
        let input = temp_path("gzonly");
        fs::write(&input, br#"["one"]"#).unwrap();

        let config = CompressConfig {
            input: input.clone(),
            brotli: false,
        };
        let report = run_compress(&config).unwrap();

        assert_eq!(report.artifacts.len(), 1);
        assert_eq!(report.artifacts[0].codec, Codec::Gzip);

        fs::remove_file(&report.artifacts[0].path).unwrap();
        fs::remove_file(&input).unwrap();
    }

    #[test]
    fn compress_missing_input_is_an_error() {
        let config = CompressConfig {
            input: PathBuf::from("no/such/file.json"),
            brotli: true,
        };
        assert!(run_compress(&config).is_err());
    }
}
