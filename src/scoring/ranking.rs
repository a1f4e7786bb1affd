// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.

use crate::types::ScoredEntry;
use std::cmp::Ordering;

/// Compare two search results for ranking.
///
/// Sort order:
/// 1. **Score** - descending (higher wins)
/// 2. **Title** - ascending, ignoring case
/// 3. **Title** - ascending, exact (so "Alpha" and "alpha" still order stably)
/// 4. **Id** - final tiebreaker when everything else is equal
///
/// With binary scoring every hit ties on step 1, which makes alphabetical
/// title order the effective ranking.
pub fn compare_results(a: &ScoredEntry<'_>, b: &ScoredEntry<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| cmp_ignore_case(&a.entry.title, &b.entry.title))
        .then_with(|| a.entry.title.cmp(&b.entry.title))
        .then_with(|| a.entry.id.cmp(&b.entry.id))
}

/// Case-insensitive comparison without allocating lowercased copies.
fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
