// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers and their order.
//!
//! Relevance is binary. An entry either contains the query somewhere or it
//! doesn't, so every hit carries the same score and ordering falls through to
//! the title.

pub mod ranking;

/// Score given to an entry when any searchable field contains the query.
pub const MATCH_SCORE: u32 = 100;

/// Score of an entry that matched nothing. Never returned in results.
pub const NO_MATCH_SCORE: u32 = 0;

pub use ranking::compare_results;
