//! Formatting utilities for terminal output

use std::collections::BTreeMap;

/// Format a byte count for humans
///
/// Small sizes stay in bytes; larger ones switch to KB and MB.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    let value = bytes as f64;
    if value >= MB {
        format!("{:.2} MB", value / MB)
    } else if value >= KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{bytes} bytes")
    }
}

/// Size reduction of a compressed form, as a percentage of the original
///
/// Returns 0.0 when the original is empty.
#[must_use]
pub fn reduction_percent(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (1.0 - compressed as f64 / original as f64) * 100.0
}

/// Group words by character length, shortest first
///
/// Relative order within each group follows the input.
#[must_use]
pub fn group_by_length(words: &[String]) -> Vec<(usize, Vec<&str>)> {
    let mut groups: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for word in words {
        groups.entry(word.chars().count()).or_default().push(word);
    }
    groups.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bytes_small() {
        assert_eq!(format_bytes(0), "0 bytes");
        assert_eq!(format_bytes(999), "999 bytes");
    }

    #[test]
    fn format_bytes_kilobytes() {
        assert_eq!(format_bytes(2048), "2.0 KB");
    }

    #[test]
    fn format_bytes_megabytes() {
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn reduction_percent_typical() {
        let reduction = reduction_percent(1000, 250);
        assert!((reduction - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reduction_percent_empty_original() {
        assert!((reduction_percent(0, 0)).abs() < f64::EPSILON);
    }

    #[test]
    fn group_by_length_orders_groups() {
        let words = ["seat", "tease", "eats", "easel"].map(String::from);
        let groups = group_by_length(&words);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], (4, vec!["seat", "eats"]));
        assert_eq!(groups[1], (5, vec!["tease", "easel"]));
    }

    #[test]
    fn group_by_length_counts_characters() {
        // Cyrillic words group by character count, not byte length
        let words = ["куче".to_string()];
        let groups = group_by_length(&words);
        assert_eq!(groups[0].0, 4);
    }

    #[test]
    fn group_by_length_empty() {
        assert!(group_by_length(&[]).is_empty());
    }
}
