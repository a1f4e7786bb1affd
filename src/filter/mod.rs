// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record filtering: narrow a collection to what the current filter state allows.
//!
//! Semantics are AND across axes and OR within a multi-valued axis:
//!
//! | Axis              | Record passes when                                   |
//! |-------------------|------------------------------------------------------|
//! | date              | its date falls in `[from, to]` (whole days)          |
//! | contentType       | its label is one of the allowed values               |
//! | provider          | its label is one of the allowed values               |
//! | skills, groups... | at least one of its tags is an allowed value         |
//!
//! An axis is skipped when the filter state leaves it unrestricted, or when the
//! record has no value for it. Output order always matches input order, which
//! pagination downstream relies on.
//!
//! Unparseable record dates only matter when the date axis is active; then the
//! record is excluded. Nothing here returns an error.

mod axes;
pub mod dates;

use crate::types::{Axis, FilterState};

pub use axes::{AxisOutcome, Filterable};
pub use dates::{normalize_date, DateInterval};

use axes::{date_outcome, label_outcome, tags_outcome};

/// A filter state with its active axes and date interval worked out once,
/// instead of once per record.
#[derive(Debug, Clone)]
pub struct CompiledFilter<'s> {
    state: &'s FilterState,
    axes: Vec<Axis>,
    interval: Option<DateInterval>,
}

impl<'s> CompiledFilter<'s> {
    pub fn new(state: &'s FilterState) -> Self {
        Self {
            state,
            axes: state.active_axes(),
            interval: state
                .date_range
                .bounds()
                .map(|(from, to)| DateInterval::new(from, to)),
        }
    }

    /// Active axes, in evaluation order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Judge one record on one axis. Inactive axes are always `Skipped`.
    pub fn outcome<R: Filterable + ?Sized>(&self, record: &R, axis: Axis) -> AxisOutcome {
        match axis {
            Axis::Date => match &self.interval {
                Some(interval) => date_outcome(record, interval),
                None => AxisOutcome::Skipped,
            },
            Axis::ContentType | Axis::Provider => match self.state.values(axis) {
                Some(allowed) if !allowed.is_empty() => label_outcome(record.label(axis), allowed),
                _ => AxisOutcome::Skipped,
            },
            _ => match self.state.values(axis) {
                Some(allowed) if !allowed.is_empty() => tags_outcome(record.tags(axis), allowed),
                _ => AxisOutcome::Skipped,
            },
        }
    }

    /// Short-circuiting conjunction over the active axes.
    pub fn matches<R: Filterable + ?Sized>(&self, record: &R) -> bool {
        self.axes
            .iter()
            .all(|axis| self.outcome(record, *axis).passes())
    }

    /// Every active axis the record fails, without short-circuiting.
    pub fn failing_axes<R: Filterable + ?Sized>(&self, record: &R) -> Vec<Axis> {
        self.axes
            .iter()
            .copied()
            .filter(|axis| !self.outcome(record, *axis).passes())
            .collect()
    }
}

/// Keep the records that pass every active axis, in their original order.
///
/// # Example
///
/// ```
/// use lxp_insights::{filter_records, Axis, FilterState, FilterableRecord};
///
/// let mut sql = FilterableRecord::with_id("a");
/// sql.skills = Some(vec!["Python".into(), "SQL".into()]);
/// let undated = FilterableRecord::with_id("b");
///
/// let mut state = FilterState::unrestricted();
/// state.set_axis(Axis::Skills, ["SQL", "Java"]);
///
/// let kept = filter_records(&[sql, undated], &state);
/// assert_eq!(kept.len(), 2); // "b" has no skills, so the axis skips it
/// ```
pub fn filter_records<R: Filterable + Clone>(records: &[R], state: &FilterState) -> Vec<R> {
    let compiled = CompiledFilter::new(state);
    if compiled.axes.is_empty() {
        return records.to_vec();
    }

    let kept: Vec<R> = records
        .iter()
        .filter(|record| compiled.matches(*record))
        .cloned()
        .collect();

    tracing::debug!(
        input = records.len(),
        output = kept.len(),
        axes = ?compiled.axes,
        "filtered records"
    );
    kept
}

/// Order-preserving parallel variant of [`filter_records`] for large inputs.
#[cfg(feature = "parallel")]
pub fn filter_records_parallel<R>(records: &[R], state: &FilterState) -> Vec<R>
where
    R: Filterable + Clone + Send + Sync,
{
    use rayon::prelude::*;

    let compiled = CompiledFilter::new(state);
    if compiled.axes.is_empty() {
        return records.to_vec();
    }

    // Indexed source + collect into Vec keeps the input order.
    records
        .par_iter()
        .filter(|record| compiled.matches(*record))
        .cloned()
        .collect()
}

/// Whether a single record passes the filter state.
pub fn record_passes<R: Filterable + ?Sized>(record: &R, state: &FilterState) -> bool {
    CompiledFilter::new(state).matches(record)
}

/// Axes a single record fails under the filter state. Empty when it passes.
pub fn explain<R: Filterable + ?Sized>(record: &R, state: &FilterState) -> Vec<Axis> {
    CompiledFilter::new(state).failing_axes(record)
}

/// Counters gathered by [`filter_with_stats`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub input: usize,
    pub output: usize,
    /// Records rejected on each axis. A record failing two axes counts on both.
    pub rejected_by: Vec<(Axis, usize)>,
    /// Records excluded because their date text could not be parsed.
    pub malformed_dates: usize,
}

impl FilterStats {
    pub fn rejected_on(&self, axis: Axis) -> usize {
        self.rejected_by
            .iter()
            .find(|(a, _)| *a == axis)
            .map_or(0, |(_, count)| *count)
    }
}

/// [`filter_records`] plus per-axis rejection counts.
///
/// Evaluates every active axis for every record, so it is slower than the
/// short-circuiting path; use it for diagnostics, not hot loops.
pub fn filter_with_stats<R: Filterable + Clone>(
    records: &[R],
    state: &FilterState,
) -> (Vec<R>, FilterStats) {
    let compiled = CompiledFilter::new(state);
    let mut counts = vec![0usize; compiled.axes.len()];
    let mut malformed_dates = 0;
    let mut kept = Vec::new();

    for record in records {
        let mut passes = true;
        for (slot, axis) in compiled.axes.iter().enumerate() {
            match compiled.outcome(record, *axis) {
                AxisOutcome::Skipped | AxisOutcome::Passed => {}
                AxisOutcome::Rejected => {
                    counts[slot] += 1;
                    passes = false;
                }
                AxisOutcome::Malformed => {
                    counts[slot] += 1;
                    malformed_dates += 1;
                    passes = false;
                }
            }
        }
        if passes {
            kept.push(record.clone());
        }
    }

    if malformed_dates > 0 {
        tracing::warn!(
            count = malformed_dates,
            "excluded records with unparseable dates"
        );
    }

    let stats = FilterStats {
        input: records.len(),
        output: kept.len(),
        rejected_by: compiled.axes.iter().copied().zip(counts).collect(),
        malformed_dates,
    };
    (kept, stats)
}
