// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stock aggregations and series for the overview dashboard.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::filter::{normalize_date, Filterable};
use crate::types::Axis;

/// One plotted point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

fn distinct_labels<R: Filterable>(records: &[R], axis: Axis) -> usize {
    records
        .iter()
        .filter_map(|r| r.label(axis))
        .collect::<BTreeSet<_>>()
        .len()
}

fn distinct_tags<R: Filterable>(records: &[R], axis: Axis) -> usize {
    records
        .iter()
        .filter_map(|r| r.tags(axis))
        .flatten()
        .collect::<BTreeSet<_>>()
        .len()
}

/// Headline numbers: totals and distinct counts.
///
/// Keys: `totalRecords`, `datedRecords`, `distinctContentTypes`,
/// `distinctProviders`, `distinctSkills`.
pub fn summary_kpis<R: Filterable>(records: &[R]) -> BTreeMap<String, f64> {
    let dated = records
        .iter()
        .filter(|r| r.date_text().and_then(normalize_date).is_some())
        .count();

    BTreeMap::from([
        ("totalRecords".to_string(), records.len() as f64),
        ("datedRecords".to_string(), dated as f64),
        (
            "distinctContentTypes".to_string(),
            distinct_labels(records, Axis::ContentType) as f64,
        ),
        (
            "distinctProviders".to_string(),
            distinct_labels(records, Axis::Provider) as f64,
        ),
        (
            "distinctSkills".to_string(),
            distinct_tags(records, Axis::Skills) as f64,
        ),
    ])
}

/// How many records carry each value on `axis`.
///
/// Multi-valued axes count a record once per tag. The date axis has no
/// values and yields an empty map.
pub fn count_by<R: Filterable>(records: &[R], axis: Axis) -> BTreeMap<String, f64> {
    let mut counts = BTreeMap::new();
    for record in records {
        if axis.is_multi_valued() {
            for tag in record.tags(axis).unwrap_or_default() {
                *counts.entry(tag.clone()).or_insert(0.0) += 1.0;
            }
        } else if let Some(label) = record.label(axis) {
            *counts.entry(label.to_string()).or_insert(0.0) += 1.0;
        }
    }
    counts
}

/// Records per calendar day, ascending. Undated and malformed records are skipped.
pub fn daily_counts<R: Filterable>(records: &[R]) -> Vec<SeriesPoint> {
    let mut days: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for instant in records
        .iter()
        .filter_map(|r| r.date_text().and_then(normalize_date))
    {
        *days.entry(instant.date()).or_insert(0.0) += 1.0;
    }
    days.into_iter()
        .map(|(day, value)| SeriesPoint {
            label: day.format("%Y-%m-%d").to_string(),
            value,
        })
        .collect()
}
