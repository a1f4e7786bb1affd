//! Utility functions for string processing.

/// Normalize text for matching: trim surrounding whitespace and lowercase.
///
/// No diacritic folding and no whitespace collapsing: `"café"` stays `"café"`,
/// and the lexical matcher compares exactly what the user typed, minus case.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Length of a string in characters rather than bytes.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
