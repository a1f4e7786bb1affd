// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for the search path: query normalization and the
//! per-field containment test.

use crate::types::SearchableEntry;
use crate::utils::{char_len, normalize};

/// Queries shorter than this (in characters, after trimming) return nothing.
pub const MIN_QUERY_LEN: usize = 2;

/// Which field of an entry contained the query first.
///
/// Fields are probed in declaration order. This is informational only;
/// the field does not influence the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedField {
    Title,
    Description,
    Category,
    Tag,
    Synonym,
}

impl MatchedField {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchedField::Title => "title",
            MatchedField::Description => "description",
            MatchedField::Category => "category",
            MatchedField::Tag => "tag",
            MatchedField::Synonym => "synonym",
        }
    }
}

/// Normalize a raw query, or `None` if it is too short to search with.
///
/// # Example
///
/// ```ignore
/// assert_eq!(parse_query("  Py "), Some("py".to_string()));
/// assert_eq!(parse_query(" p "), None);
/// ```
pub fn parse_query(query: &str) -> Option<String> {
    let normalized = normalize(query);
    (char_len(&normalized) >= MIN_QUERY_LEN).then_some(normalized)
}

fn contains(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

/// First field of `entry` containing the already-normalized `needle`.
pub fn matched_field(entry: &SearchableEntry, needle: &str) -> Option<MatchedField> {
    if contains(&entry.title, needle) {
        Some(MatchedField::Title)
    } else if contains(&entry.description, needle) {
        Some(MatchedField::Description)
    } else if contains(&entry.category, needle) {
        Some(MatchedField::Category)
    } else if entry.tags.iter().any(|tag| contains(tag, needle)) {
        Some(MatchedField::Tag)
    } else if entry.synonyms.iter().any(|syn| contains(syn, needle)) {
        Some(MatchedField::Synonym)
    } else {
        None
    }
}
