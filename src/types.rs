// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of filtering and search.
//!
//! Records are loosely shaped: every attribute the filter understands is
//! optional, and anything it doesn't understand rides along in `extra`.
//! Absence is meaningful. A record without `skills` does not take part in
//! the skills axis at all, while a record with `skills: []` does (and fails
//! any active skills restriction).
//!
//! # Invariants
//!
//! - **FilterableRecord**: a missing attribute never excludes the record on
//!   that axis.
//! - **FilterState**: an empty value set means "no restriction". The date
//!   axis is only active when both bounds are present.
//! - **SearchableEntry**: catalogs are read-only for the lifetime of the
//!   ranker that owns them.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{Duration, Local, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::filter::normalize_date;

/// Length of the default date window, in days, ending today.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

// =============================================================================
// RECORDS
// =============================================================================

/// A record the filter can narrow.
///
/// The date is kept as the raw text it arrived with; the filter normalizes it
/// when (and only when) the date axis is active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterableRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_attribute: Option<Vec<String>>,
    /// Domain fields the filter never looks at (titles, scores, learner names...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl FilterableRecord {
    /// Empty record with only an id set.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

// =============================================================================
// AXES
// =============================================================================

/// One independent filtering dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    Date,
    ContentType,
    Provider,
    Skills,
    Groups,
    Roles,
    CustomAttribute,
}

impl Axis {
    /// Every axis, in evaluation order.
    pub const ALL: [Axis; 7] = [
        Axis::Date,
        Axis::ContentType,
        Axis::Provider,
        Axis::Skills,
        Axis::Groups,
        Axis::Roles,
        Axis::CustomAttribute,
    ];

    /// Axes restricted by a set of allowed string values.
    pub const CATEGORICAL: [Axis; 6] = [
        Axis::ContentType,
        Axis::Provider,
        Axis::Skills,
        Axis::Groups,
        Axis::Roles,
        Axis::CustomAttribute,
    ];

    /// Whether records carry several tags on this axis rather than one label.
    pub fn is_multi_valued(self) -> bool {
        matches!(
            self,
            Axis::Skills | Axis::Groups | Axis::Roles | Axis::CustomAttribute
        )
    }

    /// JSON key of the axis on records and filter state.
    pub fn key(self) -> &'static str {
        match self {
            Axis::Date => "dateRange",
            Axis::ContentType => "contentType",
            Axis::Provider => "provider",
            Axis::Skills => "skills",
            Axis::Groups => "groups",
            Axis::Roles => "roles",
            Axis::CustomAttribute => "customAttribute",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// FILTER STATE
// =============================================================================

/// Inclusive calendar-date interval. Either bound may be unset.
///
/// Bounds serialize as `YYYY-MM-DD`. On input any layout the record filter
/// accepts is taken, so `"2024-01-01T00:00:00.000Z"` reads as `2024-01-01`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(
        default,
        deserialize_with = "deserialize_bound",
        skip_serializing_if = "Option::is_none"
    )]
    pub from: Option<NaiveDate>,
    #[serde(
        default,
        deserialize_with = "deserialize_bound",
        skip_serializing_if = "Option::is_none"
    )]
    pub to: Option<NaiveDate>,
}

// Date-time bounds keep only their calendar date.
fn deserialize_bound<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    normalize_date(&text)
        .map(|instant| Some(instant.date()))
        .ok_or_else(|| de::Error::custom(format!("invalid date bound '{}'", text)))
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Both bounds, if the range is complete enough to filter on.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.from?, self.to?))
    }
}

/// The user's current restrictions.
///
/// `Default` is the session default (trailing 30-day window ending today).
/// Use [`FilterState::unrestricted`] for a state that lets everything through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub date_range: DateRange,
    #[serde(default)]
    pub content_type: BTreeSet<String>,
    #[serde(default)]
    pub provider: BTreeSet<String>,
    #[serde(default)]
    pub skills: BTreeSet<String>,
    #[serde(default)]
    pub groups: BTreeSet<String>,
    #[serde(default)]
    pub roles: BTreeSet<String>,
    #[serde(default)]
    pub custom_attribute: BTreeSet<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::trailing_window(Local::now().date_naive())
    }
}

impl FilterState {
    /// No date bounds, no categorical restrictions.
    pub fn unrestricted() -> Self {
        Self {
            date_range: DateRange::default(),
            content_type: BTreeSet::new(),
            provider: BTreeSet::new(),
            skills: BTreeSet::new(),
            groups: BTreeSet::new(),
            roles: BTreeSet::new(),
            custom_attribute: BTreeSet::new(),
        }
    }

    /// Session default anchored at `today`: the last 30 days, inclusive.
    pub fn trailing_window(today: NaiveDate) -> Self {
        Self {
            date_range: DateRange::new(today - Duration::days(DEFAULT_WINDOW_DAYS), today),
            ..Self::unrestricted()
        }
    }

    /// Restore the session default in place.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::trailing_window(today);
    }

    /// Allowed values for a categorical axis. `None` for the date axis.
    pub fn values(&self, axis: Axis) -> Option<&BTreeSet<String>> {
        match axis {
            Axis::Date => None,
            Axis::ContentType => Some(&self.content_type),
            Axis::Provider => Some(&self.provider),
            Axis::Skills => Some(&self.skills),
            Axis::Groups => Some(&self.groups),
            Axis::Roles => Some(&self.roles),
            Axis::CustomAttribute => Some(&self.custom_attribute),
        }
    }

    fn values_mut(&mut self, axis: Axis) -> Option<&mut BTreeSet<String>> {
        match axis {
            Axis::Date => None,
            Axis::ContentType => Some(&mut self.content_type),
            Axis::Provider => Some(&mut self.provider),
            Axis::Skills => Some(&mut self.skills),
            Axis::Groups => Some(&mut self.groups),
            Axis::Roles => Some(&mut self.roles),
            Axis::CustomAttribute => Some(&mut self.custom_attribute),
        }
    }

    /// Replace the allowed values of a categorical axis. No-op for `Axis::Date`.
    pub fn set_axis<I, S>(&mut self, axis: Axis, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(set) = self.values_mut(axis) {
            *set = values.into_iter().map(Into::into).collect();
        }
    }

    /// Add the value if absent, remove it if present (checkbox semantics).
    /// Returns whether the value is selected afterwards.
    pub fn toggle(&mut self, axis: Axis, value: &str) -> bool {
        let Some(set) = self.values_mut(axis) else {
            return false;
        };
        if set.remove(value) {
            false
        } else {
            set.insert(value.to_string());
            true
        }
    }

    /// Lift the restriction on one axis.
    pub fn clear_axis(&mut self, axis: Axis) {
        match self.values_mut(axis) {
            Some(set) => set.clear(),
            None => self.date_range = DateRange::default(),
        }
    }

    /// Whether the axis currently narrows anything.
    pub fn is_active(&self, axis: Axis) -> bool {
        match axis {
            Axis::Date => self.date_range.bounds().is_some(),
            other => self.values(other).is_some_and(|set| !set.is_empty()),
        }
    }

    /// Axes that are currently restricting, in evaluation order.
    pub fn active_axes(&self) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|axis| self.is_active(*axis))
            .collect()
    }

    pub fn is_unrestricted(&self) -> bool {
        Axis::ALL.iter().all(|axis| !self.is_active(*axis))
    }
}

// =============================================================================
// SEARCH CATALOG
// =============================================================================

/// What a catalog entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dashboard,
    Visualization,
    Insight,
    Metric,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Dashboard => "dashboard",
            EntryKind::Visualization => "visualization",
            EntryKind::Insight => "insight",
            EntryKind::Metric => "metric",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A static catalog item eligible for search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// A search hit with its relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredEntry<'a> {
    #[serde(flatten)]
    pub entry: &'a SearchableEntry,
    pub score: u32,
}
