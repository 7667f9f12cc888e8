//! Spelling Bee puzzle definition
//!
//! A Puzzle is one required letter plus the optional letters around it;
//! together they form the allowed alphabet for word validity.

use rustc_hash::FxHashSet;
use std::fmt;

/// A Spelling Bee puzzle: a required letter and the set of allowed letters
///
/// The allowed set always contains the required letter. All letters are held
/// in lowercase; duplicate or overlapping optional letters collapse harmlessly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    required: char,
    allowed: FxHashSet<char>,
}

/// Error type for invalid puzzle definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The required letter was empty or longer than one character
    InvalidRequired(String),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRequired(input) => {
                write!(f, "required letter must be exactly one character, got {input:?}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

impl Puzzle {
    /// Create a new Puzzle from a required letter and optional letters
    ///
    /// Everything is lowercased before use. The required letter may appear
    /// redundantly among the optional letters.
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidRequired` if `required` is empty or
    /// longer than one character. It is never silently truncated.
    ///
    /// # Examples
    /// ```
    /// use spellbee::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new("E", &['a', 't', 's']).unwrap();
    /// assert_eq!(puzzle.required(), 'e');
    /// assert_eq!(puzzle.letter_count(), 4);
    ///
    /// assert!(Puzzle::new("", &[]).is_err());
    /// assert!(Puzzle::new("ab", &[]).is_err());
    /// ```
    pub fn new(required: &str, optional: &[char]) -> Result<Self, PuzzleError> {
        let folded = required.to_lowercase();
        let mut chars = folded.chars();
        let required = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(PuzzleError::InvalidRequired(required.to_string())),
        };

        let mut allowed: FxHashSet<char> =
            optional.iter().flat_map(|c| c.to_lowercase()).collect();
        allowed.insert(required);

        Ok(Self { required, allowed })
    }

    /// The required (central) letter, lowercase
    #[inline]
    #[must_use]
    pub const fn required(&self) -> char {
        self.required
    }

    /// The full allowed alphabet, including the required letter
    #[inline]
    #[must_use]
    pub const fn allowed(&self) -> &FxHashSet<char> {
        &self.allowed
    }

    /// Number of distinct letters in the allowed alphabet
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.allowed.len()
    }

    /// Check whether a letter belongs to the allowed alphabet
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.allowed.contains(&letter)
    }

    /// Check whether a lowercase word is valid for this puzzle
    ///
    /// A word is valid iff it is at least `min_length` characters long,
    /// contains the required letter at least once, and uses only letters
    /// from the allowed alphabet. The word must already be lowercase.
    #[must_use]
    pub fn accepts(&self, word: &str, min_length: usize) -> bool {
        word.chars().count() >= min_length
            && word.contains(self.required)
            && word.chars().all(|c| self.allowed.contains(&c))
    }

    /// Check whether a lowercase word is a pangram of this puzzle
    ///
    /// A pangram uses every allowed letter at least once: its distinct
    /// character set equals the allowed alphabet exactly, not a subset.
    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        let distinct: FxHashSet<char> = word.chars().collect();
        distinct == self.allowed
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut others: Vec<char> = self
            .allowed
            .iter()
            .copied()
            .filter(|&c| c != self.required)
            .collect();
        others.sort_unstable();
        let others: String = others.into_iter().collect();
        write!(f, "[{}]{others}", self.required)
    }
}
