// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Static reference data for the search box.
//!
//! The built-in catalog lists the dashboards, visualizations, insights, and
//! metrics the LXP analytics product ships with. Suggested and recent queries
//! are plain lists handed to the UI as-is; nothing ranks them.

use crate::types::{EntryKind, SearchableEntry};

/// Queries offered before the user has typed anything.
pub const SUGGESTED_QUERIES: &[&str] = &[
    "completion rate by provider",
    "most active learners",
    "skills gap",
    "content engagement trends",
    "compliance training status",
];

/// Sample recent searches shown under the search box.
pub const RECENT_SEARCHES: &[&str] = &[
    "learning hours",
    "python courses",
    "manager dashboard",
];

struct Seed {
    id: &'static str,
    kind: EntryKind,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    synonyms: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "dash-learning-overview",
        kind: EntryKind::Dashboard,
        title: "Learning Overview Dashboard",
        description: "Organization-wide view of enrollments, completions, and learning hours",
        category: "Overview",
        tags: &["enrollments", "completions", "hours"],
        synonyms: &["home", "summary", "executive view"],
    },
    Seed {
        id: "dash-skills",
        kind: EntryKind::Dashboard,
        title: "Skills Dashboard",
        description: "Skill coverage, proficiency levels, and gaps across teams",
        category: "Skills",
        tags: &["skills", "proficiency", "gaps"],
        synonyms: &["competency", "capability"],
    },
    Seed {
        id: "dash-content",
        kind: EntryKind::Dashboard,
        title: "Content Performance Dashboard",
        description: "How courses, videos, and articles are consumed and rated",
        category: "Content",
        tags: &["courses", "videos", "ratings"],
        synonyms: &["catalog usage", "material"],
    },
    Seed {
        id: "dash-compliance",
        kind: EntryKind::Dashboard,
        title: "Compliance Dashboard",
        description: "Mandatory training assignments, due dates, and overdue learners",
        category: "Compliance",
        tags: &["mandatory", "overdue", "certification"],
        synonyms: &["required training", "regulatory"],
    },
    Seed {
        id: "viz-engagement-trend",
        kind: EntryKind::Visualization,
        title: "Engagement Trend",
        description: "Daily active learners over the selected date range",
        category: "Engagement",
        tags: &["line chart", "daily", "active users"],
        synonyms: &["activity over time", "usage trend"],
    },
    Seed {
        id: "viz-provider-mix",
        kind: EntryKind::Visualization,
        title: "Provider Mix",
        description: "Share of consumption by content provider",
        category: "Content",
        tags: &["pie chart", "providers", "vendors"],
        synonyms: &["vendor breakdown", "source split"],
    },
    Seed {
        id: "viz-skill-heatmap",
        kind: EntryKind::Visualization,
        title: "Skill Heatmap",
        description: "Proficiency by team and skill",
        category: "Skills",
        tags: &["heatmap", "teams"],
        synonyms: &["competency matrix"],
    },
    Seed {
        id: "insight-python-demand",
        kind: EntryKind::Insight,
        title: "Python Demand Rising",
        description: "Python course enrollments grew faster than any other skill this quarter",
        category: "Skills",
        tags: &["python", "growth", "programming"],
        synonyms: &["coding interest"],
    },
    Seed {
        id: "insight-drop-off",
        kind: EntryKind::Insight,
        title: "Mid-Course Drop-Off",
        description: "Learners abandon long courses around the 40% mark",
        category: "Engagement",
        tags: &["attrition", "completion"],
        synonyms: &["churn", "abandonment"],
    },
    Seed {
        id: "metric-completion-rate",
        kind: EntryKind::Metric,
        title: "Completion Rate",
        description: "Completed enrollments divided by total enrollments",
        category: "Outcomes",
        tags: &["kpi", "completion", "percentage"],
        synonyms: &["finish rate", "success rate"],
    },
    Seed {
        id: "metric-learning-hours",
        kind: EntryKind::Metric,
        title: "Learning Hours",
        description: "Total time spent in learning activities",
        category: "Engagement",
        tags: &["kpi", "time", "hours"],
        synonyms: &["study time", "time spent"],
    },
    Seed {
        id: "metric-active-learners",
        kind: EntryKind::Metric,
        title: "Active Learners",
        description: "Distinct learners with at least one activity in the period",
        category: "Engagement",
        tags: &["kpi", "users", "mau"],
        synonyms: &["engaged users", "monthly actives"],
    },
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// The catalog shipped with the product, in declaration order.
pub fn builtin_catalog() -> Vec<SearchableEntry> {
    SEEDS
        .iter()
        .map(|seed| SearchableEntry {
            id: seed.id.to_string(),
            kind: seed.kind,
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            category: seed.category.to_string(),
            tags: owned(seed.tags),
            synonyms: owned(seed.synonyms),
        })
        .collect()
}
