//! Word list cleaning
//!
//! Normalizes a raw word list: lowercases, deduplicates, drops words with
//! forbidden punctuation, drops words below a minimum length.

use rustc_hash::FxHashSet;

/// Right single quotation mark, the curly apostrophe raw lists often carry
pub const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

/// Options controlling the cleaning pass
///
/// Defaults match the game's dictionary conventions: minimum four letters,
/// and no hyphenated, tilde-marked, or apostrophized entries.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Minimum word length in characters; 0 disables the length filter
    pub min_length: usize,
    /// Characters whose presence anywhere in a word rejects it
    pub forbidden: Vec<char>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            min_length: 4,
            forbidden: vec!['-', '~', '\'', RIGHT_SINGLE_QUOTE],
        }
    }
}

impl CleanOptions {
    /// Default options with a different minimum length
    #[must_use]
    pub fn with_min_length(min_length: usize) -> Self {
        Self {
            min_length,
            ..Self::default()
        }
    }
}

/// Counts gathered during a cleaning pass
///
/// Informational only; the cleaning functions never print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CleanStats {
    /// Words in the raw input
    pub initial: usize,
    /// Words surviving all filters
    pub kept: usize,
    /// Words dropped for any reason, duplicates included
    pub removed: usize,
    /// Words dropped because their lowercase form was already accepted
    pub duplicates: usize,
}

/// Clean a raw word list
///
/// Each word is lowercased, then skipped if its lowercase form was already
/// kept, if it contains any forbidden character, or if it is shorter than
/// `min_length` characters. Order of first occurrence is preserved.
///
/// Cleaning is idempotent: running the output through `clean` again with the
/// same options returns it unchanged.
///
/// # Examples
/// ```
/// use spellbee::pipeline::{CleanOptions, clean};
///
/// let raw = ["Apple", "apple", "a-b", "hi", "test"].map(String::from);
/// let (cleaned, stats) = clean(&raw, &CleanOptions::default());
///
/// assert_eq!(cleaned, vec!["apple", "test"]);
/// assert_eq!(stats.duplicates, 1);
/// ```
#[must_use]
pub fn clean(words: &[String], options: &CleanOptions) -> (Vec<String>, CleanStats) {
    let mut cleaned = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut duplicates = 0;

    for word in words {
        let word = word.to_lowercase();

        if seen.contains(&word) {
            duplicates += 1;
            continue;
        }

        if word.chars().any(|c| options.forbidden.contains(&c)) {
            continue;
        }

        // Character count, not byte length: the corpus is not ASCII
        if word.chars().count() < options.min_length {
            continue;
        }

        seen.insert(word.clone());
        cleaned.push(word);
    }

    let stats = CleanStats {
        initial: words.len(),
        kept: cleaned.len(),
        removed: words.len() - cleaned.len(),
        duplicates,
    };

    log::debug!(
        "cleaned {} -> {} words ({} duplicates)",
        stats.initial,
        stats.kept,
        stats.duplicates
    );

    (cleaned, stats)
}
