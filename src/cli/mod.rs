// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lxp command-line interface.
//!
//! Four subcommands: `filter` to narrow a data directory's records and page
//! through them, `summary` for the KPI view of the same selection, `search` to
//! query the catalog, and `suggest` to print the static query lists.

pub mod display;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use lxp_insights::{Axis, Error, FilterState, Result};

#[derive(Parser)]
#[command(
    name = "lxp",
    about = "Filter learning records and search the analytics catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter records from a data directory and print one page
    Filter {
        /// Data directory containing manifest.json and record files
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,

        /// Page to show (1-based)
        #[arg(long, default_value = "1")]
        page: usize,

        /// Rows per page (defaults to the manifest's pageSize, then 20)
        #[arg(long)]
        page_size: Option<usize>,

        /// List excluded records with the axes they failed
        #[arg(long)]
        explain: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show KPIs and breakdowns for the filtered records
    Summary {
        /// Data directory containing manifest.json and record files
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search the catalog of dashboards, visualizations, insights, and metrics
    Search {
        /// Search query (at least 2 characters)
        query: String,

        /// Data directory whose manifest names a catalog; built-in catalog otherwise
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print suggested queries and recent searches
    Suggest {
        /// Emit JSON instead of a list
        #[arg(long)]
        json: bool,
    },
}

/// Filter-state flags shared by `filter` and `summary`.
///
/// The base state comes from, in order: `--all` (unrestricted), `--filters`,
/// the manifest's saved filters, and finally the trailing 30-day window.
/// Date and axis flags then override the base one axis at a time.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Start from no restrictions at all instead of the default window
    #[arg(long)]
    pub all: bool,

    /// Saved filter state (JSON) to start from
    #[arg(long, value_name = "FILE")]
    pub filters: Option<PathBuf>,

    /// First day of the date range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Last day of the date range, inclusive (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Allowed content type (repeatable)
    #[arg(long = "content-type", value_name = "VALUE")]
    pub content_types: Vec<String>,

    /// Allowed provider (repeatable)
    #[arg(long = "provider", value_name = "VALUE")]
    pub providers: Vec<String>,

    /// Skill tag to match (repeatable; any one suffices)
    #[arg(long = "skill", value_name = "VALUE")]
    pub skills: Vec<String>,

    /// Group tag to match (repeatable)
    #[arg(long = "group", value_name = "VALUE")]
    pub groups: Vec<String>,

    /// Role tag to match (repeatable)
    #[arg(long = "role", value_name = "VALUE")]
    pub roles: Vec<String>,

    /// Custom attribute tag to match (repeatable)
    #[arg(long = "custom", value_name = "VALUE")]
    pub custom: Vec<String>,
}

fn parse_day(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(text.to_string()))
}

impl FilterArgs {
    /// Build the effective filter state.
    ///
    /// `saved` is the manifest's filter state, if any; `today` anchors the
    /// default window.
    pub fn resolve(&self, saved: Option<FilterState>, today: NaiveDate) -> Result<FilterState> {
        let mut state = if self.all {
            FilterState::unrestricted()
        } else if let Some(path) = &self.filters {
            lxp_insights::load::load_filter_state(path)?
        } else {
            saved.unwrap_or_else(|| FilterState::trailing_window(today))
        };

        if let Some(from) = &self.from {
            state.date_range.from = Some(parse_day(from)?);
        }
        if let Some(to) = &self.to {
            state.date_range.to = Some(parse_day(to)?);
        }

        for (axis, values) in [
            (Axis::ContentType, &self.content_types),
            (Axis::Provider, &self.providers),
            (Axis::Skills, &self.skills),
            (Axis::Groups, &self.groups),
            (Axis::Roles, &self.roles),
            (Axis::CustomAttribute, &self.custom),
        ] {
            if !values.is_empty() {
                state.set_axis(axis, values.iter().cloned());
            }
        }
        Ok(state)
    }
}
