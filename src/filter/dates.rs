// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Date normalization for the date-range axis.
//!
//! Records carry dates as whatever text the producer emitted: bare calendar
//! dates, local date-times, RFC 3339 stamps with offsets. Everything is folded
//! into a `NaiveDateTime` (offset stamps are converted to UTC first) so that the
//! interval test is a plain comparison.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Date-time layouts tried after RFC 3339, in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Calendar-date layouts, interpreted as midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a textual record date into a comparable instant.
///
/// Returns `None` when no supported layout matches.
pub fn normalize_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Some(stamp.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(text, format) {
            return Some(instant);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// Instants covered by an inclusive calendar-date range.
///
/// `from` starts at midnight; `to` covers its whole day, so the end is stored
/// exclusively as midnight of the following day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    start: NaiveDateTime,
    end_exclusive: Option<NaiveDateTime>,
}

impl DateInterval {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            start: from.and_time(NaiveTime::MIN),
            end_exclusive: to.succ_opt().map(|next| next.and_time(NaiveTime::MIN)),
        }
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && self.end_exclusive.map_or(true, |end| instant < end)
    }
}
