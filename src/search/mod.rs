// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lexical catalog search for search-as-you-type.
//!
//! Deliberately simple: a case-insensitive substring test over title,
//! description, category, tags, and synonyms. A hit scores
//! [`MATCH_SCORE`](crate::scoring::MATCH_SCORE), a miss is dropped, and hits are
//! ordered by title. Every call rescans the catalog; catalogs are small and
//! static, so there is nothing to cache.

pub mod utils;

use crate::catalog::builtin_catalog;
use crate::scoring::{compare_results, MATCH_SCORE, NO_MATCH_SCORE};
use crate::types::{ScoredEntry, SearchableEntry};

pub use utils::{matched_field, parse_query, MatchedField, MIN_QUERY_LEN};

/// Result cap used when the caller doesn't pick one.
pub const DEFAULT_LIMIT: usize = 10;

/// Binary relevance of `entry` for an already-normalized `needle`.
pub fn score_entry(entry: &SearchableEntry, needle: &str) -> u32 {
    if matched_field(entry, needle).is_some() {
        MATCH_SCORE
    } else {
        NO_MATCH_SCORE
    }
}

/// Rank `catalog` entries against `query`, returning at most `limit` hits.
///
/// Queries under [`MIN_QUERY_LEN`] characters (after trimming) and a `limit`
/// of zero both yield an empty list.
///
/// # Example
///
/// ```
/// use lxp_insights::{search, catalog::builtin_catalog};
///
/// let catalog = builtin_catalog();
/// let hits = search(&catalog, "dashboard", 2);
/// assert!(hits.len() <= 2);
/// assert!(search(&catalog, "d", 10).is_empty());
/// ```
pub fn search<'a>(catalog: &'a [SearchableEntry], query: &str, limit: usize) -> Vec<ScoredEntry<'a>> {
    if limit == 0 {
        return Vec::new();
    }
    let Some(needle) = parse_query(query) else {
        return Vec::new();
    };

    let mut hits: Vec<ScoredEntry<'a>> = catalog
        .iter()
        .filter_map(|entry| {
            let score = score_entry(entry, &needle);
            (score > NO_MATCH_SCORE).then_some(ScoredEntry { entry, score })
        })
        .collect();

    hits.sort_by(compare_results);
    let total = hits.len();
    hits.truncate(limit);

    tracing::debug!(query = %needle, matched = total, returned = hits.len(), "catalog search");
    hits
}

/// A searcher that owns its catalog.
///
/// The catalog is fixed at construction; there is no way to mutate it
/// afterwards, so concurrent `search` calls need no synchronization.
#[derive(Debug, Clone)]
pub struct LexicalSearchRanker {
    catalog: Vec<SearchableEntry>,
}

impl LexicalSearchRanker {
    pub fn new(catalog: Vec<SearchableEntry>) -> Self {
        Self { catalog }
    }

    /// Ranker over the built-in LXP catalog.
    pub fn builtin() -> Self {
        Self::new(builtin_catalog())
    }

    pub fn catalog(&self) -> &[SearchableEntry] {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// See [`search`].
    pub fn search(&self, query: &str, limit: usize) -> Vec<ScoredEntry<'_>> {
        search(&self.catalog, query, limit)
    }

    /// [`search`] with [`DEFAULT_LIMIT`].
    pub fn search_default(&self, query: &str) -> Vec<ScoredEntry<'_>> {
        self.search(query, DEFAULT_LIMIT)
    }
}

impl Default for LexicalSearchRanker {
    fn default() -> Self {
        Self::builtin()
    }
}
