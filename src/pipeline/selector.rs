//! Constraint filtering
//!
//! Selects the subset of a word list usable in a given puzzle: words that
//! contain the required letter and use only the allowed alphabet.

use crate::core::Puzzle;

/// Filter a word list down to the words valid for a puzzle
///
/// Words need not be pre-cleaned; each is lowercased before testing. The
/// result is a subsequence of `words` in original relative order, returned
/// in lowercase. Deterministic: same inputs, same output.
///
/// # Examples
/// ```
/// use spellbee::core::Puzzle;
/// use spellbee::pipeline::select;
///
/// let puzzle = Puzzle::new("e", &['a', 't', 's']).unwrap();
/// let words = ["eats", "seat", "tea", "ease"].map(String::from);
///
/// assert_eq!(select(&puzzle, &words, 4), vec!["eats", "seat", "ease"]);
/// ```
#[must_use]
pub fn select(puzzle: &Puzzle, words: &[String], min_length: usize) -> Vec<String> {
    let selected: Vec<String> = words
        .iter()
        .map(|word| word.to_lowercase())
        .filter(|word| puzzle.accepts(word, min_length))
        .collect();

    log::debug!(
        "puzzle {puzzle}: {} of {} words match",
        selected.len(),
        words.len()
    );

    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn select_reference_scenario() {
        let puzzle = Puzzle::new("e", &['a', 't', 's']).unwrap();
        let words = owned(&["eats", "seat", "tea", "ease"]);

        // "tea" is only three letters
        assert_eq!(select(&puzzle, &words, 4), vec!["eats", "seat", "ease"]);
    }

    #[test]
    fn select_no_required_letter_matches_nothing() {
        let puzzle = Puzzle::new("x", &['a', 'b']).unwrap();
        let words = owned(&["abc"]);
        assert!(select(&puzzle, &words, 4).is_empty());
    }

    #[test]
    fn select_lowercases_output() {
        let puzzle = Puzzle::new("e", &['a', 't', 's']).unwrap();
        let words = owned(&["EATS", "Seat"]);
        assert_eq!(select(&puzzle, &words, 4), vec!["eats", "seat"]);
    }

    #[test]
    fn select_preserves_source_order() {
        let puzzle = Puzzle::new("e", &['a', 't', 's']).unwrap();
        let words = owned(&["tease", "eats", "stat", "seat"]);
        assert_eq!(select(&puzzle, &words, 4), vec!["tease", "eats", "seat"]);
    }

    #[test]
    fn select_subset_property_holds() {
        let puzzle = Puzzle::new("e", &['a', 't', 's', 'r']).unwrap();
        let words = owned(&["eater", "rates", "tree", "extra", "banana", "sea"]);

        for word in select(&puzzle, &words, 4) {
            assert!(word.chars().count() >= 4);
            assert!(word.contains('e'));
            assert!(word.chars().all(|c| puzzle.contains(c)));
        }
    }

    #[test]
    fn select_tolerates_redundant_optional_letters() {
        let a = Puzzle::new("e", &['a', 't', 's']).unwrap();
        let b = Puzzle::new("e", &['e', 'a', 'a', 't', 's']).unwrap();
        let words = owned(&["eats", "seat", "ease"]);
        assert_eq!(select(&a, &words, 4), select(&b, &words, 4));
    }

    #[test]
    fn select_cyrillic_words() {
        let puzzle = Puzzle::new("е", &['б', 'х', 'н', 'о', 'ј']).unwrap();
        let words = owned(&["небо", "охне", "куче"]);
        assert_eq!(select(&puzzle, &words, 4), vec!["небо", "охне"]);
    }

    #[test]
    fn select_empty_word_list() {
        let puzzle = Puzzle::new("e", &['a']).unwrap();
        assert!(select(&puzzle, &[], 4).is_empty());
    }
}
