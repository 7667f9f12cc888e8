//! Size-optimized JSON export
//!
//! Serializes a word list to the compact JSON array form the game client
//! downloads: no whitespace between tokens, and non-ASCII characters written
//! as raw UTF-8 rather than `\uXXXX` escapes. For a Cyrillic dictionary the
//! raw encoding is a fraction of the escaped size.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Serialize words to compact JSON bytes
///
/// The output is `["word1","word2",...]` with no whitespace and raw UTF-8
/// for non-ASCII text. Order and casing pass through untouched, so parsing
/// the bytes back as JSON reproduces the input exactly.
///
/// # Errors
/// Returns an error if serialization fails (not expected for plain strings).
///
/// # Examples
/// ```
/// use spellbee::pipeline::export_to_vec;
///
/// let words = ["b".to_string(), "a".to_string()];
/// let bytes = export_to_vec(&words).unwrap();
/// assert_eq!(bytes, br#"["b","a"]"#);
/// ```
pub fn export_to_vec(words: &[String]) -> Result<Vec<u8>> {
    serde_json::to_vec(words).context("failed to serialize word list")
}

/// Export words to a file, creating or overwriting it
///
/// Returns the size of the written file in bytes.
///
/// # Errors
/// Returns an error if serialization fails or the file cannot be written.
pub fn export_to_file<P: AsRef<Path>>(words: &[String], path: P) -> Result<u64> {
    let path = path.as_ref();
    let bytes = export_to_vec(words)?;
    fs::write(path, &bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;

    log::info!("exported {} words to {}", words.len(), path.display());
    Ok(bytes.len() as u64)
}
