//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{EntryKind, FilterableRecord, SearchableEntry};

/// Owned tag list from string literals.
pub fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Create a record with an id and an optional raw date.
pub fn make_record(id: &str, date: Option<&str>) -> FilterableRecord {
    FilterableRecord {
        id: Some(id.to_string()),
        date: date.map(str::to_string),
        ..FilterableRecord::default()
    }
}

/// Create a record carrying every filterable attribute.
pub fn make_full_record(
    id: &str,
    date: &str,
    content_type: &str,
    provider: &str,
    skills: &[&str],
) -> FilterableRecord {
    FilterableRecord {
        id: Some(id.to_string()),
        date: Some(date.to_string()),
        content_type: Some(content_type.to_string()),
        provider: Some(provider.to_string()),
        skills: Some(tags(skills)),
        groups: Some(tags(&["All Employees"])),
        roles: Some(tags(&["Learner"])),
        custom_attribute: None,
        extra: serde_json::Map::new(),
    }
}

/// Create a dashboard entry with only a title; every other text field is empty.
pub fn make_entry(id: &str, title: &str) -> SearchableEntry {
    SearchableEntry {
        id: id.to_string(),
        kind: EntryKind::Dashboard,
        title: title.to_string(),
        description: String::new(),
        category: String::new(),
        tags: Vec::new(),
        synonyms: Vec::new(),
    }
}
