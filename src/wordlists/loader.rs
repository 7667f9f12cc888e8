//! Word list loading utilities
//!
//! Word lists live on disk as JSON arrays of strings, UTF-8 encoded, in
//! whatever casing the source dictionary used.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a word list from a JSON file
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, or if its content
/// is not a JSON array of strings. Malformed JSON is a hard error; there is
/// no best-effort recovery.
///
/// # Examples
/// ```no_run
/// use spellbee::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/raw_wordlist.json").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let words: Vec<String> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of strings", path.display()))?;

    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
