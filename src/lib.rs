// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record filtering and catalog search behind the LXP analytics dashboards.
//!
//! Two independent, pure components:
//!
//! - **Record filter**: narrow a record collection to what a [`FilterState`]
//!   allows. AND across axes (date, content type, provider, skills, groups,
//!   roles, custom attributes), OR within a multi-valued axis. Order preserving.
//! - **Lexical search**: rank catalog entries (dashboards, visualizations,
//!   insights, metrics) by case-insensitive substring match, alphabetically.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│   filter/    │────▶│   views/    │
//! │ (records,   │     │ (axes, dates,│     │ (KPIs,      │
//! │ FilterState)│     │  conjunction)│     │  series,    │
//! └─────────────┘     └──────────────┘     │  pages)     │
//!        │                                 └─────────────┘
//!        ▼
//! ┌─────────────┐     ┌──────────────┐
//! │ catalog.rs  │────▶│   search/    │◀─── scoring/ (score, title order)
//! └─────────────┘     └──────────────┘
//! ```
//!
//! `load/` reads data directories from disk; `cli/` and `main.rs` wrap it all
//! in the `lxp` command.
//!
//! # Usage
//!
//! ```
//! use lxp_insights::{filter_records, search, Axis, FilterState, FilterableRecord};
//! use lxp_insights::catalog::builtin_catalog;
//!
//! let mut state = FilterState::unrestricted();
//! state.set_axis(Axis::Provider, ["Coursera"]);
//!
//! let mut record = FilterableRecord::with_id("enrollment-1");
//! record.provider = Some("Coursera".to_string());
//! assert_eq!(filter_records(&[record], &state).len(), 1);
//!
//! let catalog = builtin_catalog();
//! let hits = search(&catalog, "completion", 5);
//! assert!(!hits.is_empty());
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod load;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
mod utils;
pub mod views;

// Re-exports for public API
pub use error::{Error, Result};
pub use filter::{
    explain, filter_records, filter_with_stats, normalize_date, record_passes, AxisOutcome,
    CompiledFilter, Filterable, FilterStats,
};
#[cfg(feature = "parallel")]
pub use filter::filter_records_parallel;
pub use search::{score_entry, search, LexicalSearchRanker, DEFAULT_LIMIT, MIN_QUERY_LEN};
pub use types::{
    Axis, DateRange, EntryKind, FilterState, FilterableRecord, ScoredEntry, SearchableEntry,
    DEFAULT_WINDOW_DAYS,
};
pub use utils::normalize;
pub use views::{aggregate, chart_series, count_by, daily_counts, paginate, summary_kpis, Page, SeriesPoint};
