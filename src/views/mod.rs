// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What the dashboard renders once records are filtered.
//!
//! KPI tiles and charts are pure functions over the filtered slice: filter
//! first, then hand the survivors to an aggregation (`&[R] -> map`) or a
//! series builder (`&[R] -> Vec<point>`). Pagination slices any list for
//! tables and card grids.

pub mod kpis;
pub mod paginate;

use std::collections::BTreeMap;

use crate::filter::{filter_records, Filterable};
use crate::types::FilterState;

pub use kpis::{count_by, daily_counts, summary_kpis, SeriesPoint};
pub use paginate::{paginate, Page};

/// Filter, then reduce the survivors to named values.
///
/// # Example
///
/// ```
/// use lxp_insights::{aggregate, summary_kpis, FilterState, FilterableRecord};
///
/// let records = vec![FilterableRecord::with_id("a"), FilterableRecord::with_id("b")];
/// let kpis = aggregate(&records, &FilterState::unrestricted(), summary_kpis);
/// assert_eq!(kpis["totalRecords"], 2.0);
/// ```
pub fn aggregate<R, F>(records: &[R], state: &FilterState, f: F) -> BTreeMap<String, f64>
where
    R: Filterable + Clone,
    F: FnOnce(&[R]) -> BTreeMap<String, f64>,
{
    let filtered = filter_records(records, state);
    f(&filtered)
}

/// Filter, then turn the survivors into plotted points.
pub fn chart_series<R, P, F>(records: &[R], state: &FilterState, f: F) -> Vec<P>
where
    R: Filterable + Clone,
    F: FnOnce(&[R]) -> Vec<P>,
{
    let filtered = filter_records(records, state);
    f(&filtered)
}
