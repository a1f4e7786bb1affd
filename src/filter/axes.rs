// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-axis predicates.
//!
//! Each axis is judged on its own, with no shared state, so the conjunction in
//! `filter` can evaluate them in any order and stop at the first rejection.

use std::collections::BTreeSet;

use crate::types::{Axis, FilterableRecord};

use super::dates::{normalize_date, DateInterval};

/// Read access to the attributes the filter understands.
///
/// Every accessor defaults to `None` ("does not participate on this axis"),
/// so domain types only implement what they actually carry.
pub trait Filterable {
    /// Raw date text, normalized lazily when the date axis is active.
    fn date_text(&self) -> Option<&str> {
        None
    }

    /// Single label for `Axis::ContentType` and `Axis::Provider`.
    fn label(&self, _axis: Axis) -> Option<&str> {
        None
    }

    /// Tag set for the multi-valued axes.
    fn tags(&self, _axis: Axis) -> Option<&[String]> {
        None
    }
}

impl Filterable for FilterableRecord {
    fn date_text(&self) -> Option<&str> {
        self.date.as_deref()
    }

    fn label(&self, axis: Axis) -> Option<&str> {
        match axis {
            Axis::ContentType => self.content_type.as_deref(),
            Axis::Provider => self.provider.as_deref(),
            _ => None,
        }
    }

    fn tags(&self, axis: Axis) -> Option<&[String]> {
        match axis {
            Axis::Skills => self.skills.as_deref(),
            Axis::Groups => self.groups.as_deref(),
            Axis::Roles => self.roles.as_deref(),
            Axis::CustomAttribute => self.custom_attribute.as_deref(),
            _ => None,
        }
    }
}

impl<T: Filterable + ?Sized> Filterable for &T {
    fn date_text(&self) -> Option<&str> {
        (**self).date_text()
    }

    fn label(&self, axis: Axis) -> Option<&str> {
        (**self).label(axis)
    }

    fn tags(&self, axis: Axis) -> Option<&[String]> {
        (**self).tags(axis)
    }
}

/// How a single record fared on a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOutcome {
    /// The record carries no value for the axis.
    Skipped,
    Passed,
    Rejected,
    /// The date axis is active and the record's date text is unparseable.
    Malformed,
}

impl AxisOutcome {
    pub fn passes(self) -> bool {
        matches!(self, AxisOutcome::Skipped | AxisOutcome::Passed)
    }
}

pub(crate) fn date_outcome<R: Filterable + ?Sized>(record: &R, interval: &DateInterval) -> AxisOutcome {
    let Some(text) = record.date_text() else {
        return AxisOutcome::Skipped;
    };
    match normalize_date(text) {
        Some(instant) if interval.contains(instant) => AxisOutcome::Passed,
        Some(_) => AxisOutcome::Rejected,
        None => {
            tracing::debug!(date = text, "record date is not parseable");
            AxisOutcome::Malformed
        }
    }
}

pub(crate) fn label_outcome(value: Option<&str>, allowed: &BTreeSet<String>) -> AxisOutcome {
    match value {
        None => AxisOutcome::Skipped,
        Some(value) if allowed.contains(value) => AxisOutcome::Passed,
        Some(_) => AxisOutcome::Rejected,
    }
}

pub(crate) fn tags_outcome(tags: Option<&[String]>, allowed: &BTreeSet<String>) -> AxisOutcome {
    match tags {
        None => AxisOutcome::Skipped,
        Some(tags) if tags.iter().any(|tag| allowed.contains(tag)) => AxisOutcome::Passed,
        Some(_) => AxisOutcome::Rejected,
    }
}
