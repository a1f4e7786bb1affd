// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Local;
use clap::Parser;
use serde_json::json;

use lxp_insights::catalog::{builtin_catalog, RECENT_SEARCHES, SUGGESTED_QUERIES};
use lxp_insights::load::load_dataset;
use lxp_insights::search::matched_field;
use lxp_insights::{
    count_by, daily_counts, explain, filter_records, filter_with_stats, normalize, paginate,
    search, summary_kpis, Axis, FilterState, FilterableRecord, Result,
};

mod cli;
use cli::display::{
    count_value, heading, kind_badge, muted, pad_right, row, section_bot, section_mid,
    section_top,
};
use cli::{Cli, Commands, FilterArgs};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("LXP_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Filter {
            input,
            filter,
            page,
            page_size,
            explain,
            json,
        } => run_filter(&input, &filter, page, page_size, explain, json),
        Commands::Summary {
            input,
            filter,
            json,
        } => run_summary(&input, &filter, json),
        Commands::Search {
            query,
            input,
            limit,
            json,
        } => run_search(&query, input.as_deref(), limit, json),
        Commands::Suggest { json } => run_suggest(json),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("❌ failed to serialize output: {}", e);
            std::process::exit(1);
        }
    }
}

fn describe_state(state: &FilterState) -> Vec<String> {
    let mut lines = Vec::new();
    for axis in state.active_axes() {
        let value = match (axis, state.date_range.bounds()) {
            (Axis::Date, Some((from, to))) => format!("{} → {}", from, to),
            _ => state
                .values(axis)
                .map(|set| set.iter().cloned().collect::<Vec<_>>().join(", "))
                .unwrap_or_default(),
        };
        lines.push(format!("  {} {}", pad_right(&heading(axis.key()), 16), value));
    }
    if lines.is_empty() {
        lines.push(muted("  no restrictions"));
    }
    lines
}

fn record_line(record: &FilterableRecord) -> String {
    let id = record.id.as_deref().unwrap_or("-");
    let date = record.date.as_deref().unwrap_or("-");
    let kind = record.content_type.as_deref().unwrap_or("-");
    let provider = record.provider.as_deref().unwrap_or("-");
    let skills = record
        .skills
        .as_ref()
        .map(|s| s.join(", "))
        .unwrap_or_default();
    format!(
        "  {} {} {} {} {}",
        pad_right(id, 14),
        pad_right(date, 20),
        pad_right(kind, 12),
        pad_right(provider, 12),
        skills
    )
}

fn run_filter(
    input: &Path,
    args: &FilterArgs,
    page: usize,
    page_size: Option<usize>,
    show_explain: bool,
    json: bool,
) -> Result<()> {
    let dataset = load_dataset(input)?;
    let state = args.resolve(dataset.filters, Local::now().date_naive())?;
    let (filtered, stats) = filter_with_stats(&dataset.records, &state);
    let page = paginate(&filtered, page, page_size.unwrap_or(dataset.page_size))?;

    if json {
        let excluded: Vec<_> = if show_explain {
            dataset
                .records
                .iter()
                .filter_map(|record| {
                    let failed = explain(record, &state);
                    (!failed.is_empty()).then(|| json!({ "id": record.id, "failedAxes": failed }))
                })
                .collect()
        } else {
            Vec::new()
        };
        print_json(&json!({
            "filters": state,
            "page": page,
            "malformedDates": stats.malformed_dates,
            "skippedRecords": dataset.skipped_records,
            "excluded": excluded,
        }));
        return Ok(());
    }

    section_top("FILTERS");
    for line in describe_state(&state) {
        row(&line);
    }
    section_mid("RECORDS");
    if page.items.is_empty() {
        row(&muted("  nothing on this page"));
    }
    for record in &page.items {
        row(&record_line(record));
    }
    section_mid("PAGE");
    row(&format!(
        "  page {} of {} │ {} of {} records matched",
        page.page,
        page.total_pages.max(1),
        count_value(stats.output),
        stats.input
    ));
    if dataset.skipped_records > 0 {
        row(&muted(&format!(
            "  {} malformed rows skipped while loading",
            dataset.skipped_records
        )));
    }

    if show_explain {
        section_mid("EXCLUDED");
        for (axis, count) in &stats.rejected_by {
            row(&format!("  {} {}", pad_right(axis.key(), 16), count_value(*count)));
        }
        if stats.malformed_dates > 0 {
            row(&format!("  {} unparseable dates", stats.malformed_dates));
        }
        for record in dataset
            .records
            .iter()
            .filter(|record| !explain(*record, &state).is_empty())
            .take(page.page_size)
        {
            let failed: Vec<&str> = explain(record, &state).iter().map(|a| a.key()).collect();
            row(&format!(
                "  {} {}",
                pad_right(record.id.as_deref().unwrap_or("-"), 14),
                muted(&failed.join(", "))
            ));
        }
    }
    section_bot();
    Ok(())
}

fn run_summary(input: &Path, args: &FilterArgs, json: bool) -> Result<()> {
    let dataset = load_dataset(input)?;
    let state = args.resolve(dataset.filters, Local::now().date_naive())?;
    let filtered = filter_records(&dataset.records, &state);

    let kpis = summary_kpis(&filtered);
    let breakdowns: Vec<_> = Axis::CATEGORICAL
        .into_iter()
        .map(|axis| (axis, count_by(&filtered, axis)))
        .collect();
    let daily = daily_counts(&filtered);

    if json {
        let by_axis: BTreeMap<&str, _> = breakdowns
            .iter()
            .map(|(axis, counts)| (axis.key(), counts))
            .collect();
        print_json(&json!({
            "filters": state,
            "kpis": kpis,
            "breakdowns": by_axis,
            "daily": daily,
        }));
        return Ok(());
    }

    section_top("FILTERS");
    for line in describe_state(&state) {
        row(&line);
    }
    section_mid("KPIS");
    for (name, value) in &kpis {
        row(&format!("  {} {}", pad_right(name, 24), value));
    }
    for (axis, counts) in &breakdowns {
        section_mid(&format!("BY {}", axis.key().to_uppercase()));
        if counts.is_empty() {
            row(&muted("  none"));
        }
        for (value, count) in counts {
            row(&format!("  {} {}", pad_right(value, 24), count));
        }
    }
    section_mid("DAILY");
    for point in &daily {
        row(&format!("  {} {}", point.label, "▇".repeat(point.value.min(60.0) as usize)));
    }
    section_bot();
    Ok(())
}

fn run_search(query: &str, input: Option<&Path>, limit: usize, json: bool) -> Result<()> {
    let catalog = match input {
        Some(dir) => load_dataset(dir)?.catalog.unwrap_or_else(builtin_catalog),
        None => builtin_catalog(),
    };
    let hits = search(&catalog, query, limit);

    if json {
        print_json(&hits);
        return Ok(());
    }

    let needle = normalize(query);
    section_top(&format!("SEARCH \"{}\"", query.trim()));
    if hits.is_empty() {
        row(&muted("  no matches"));
    }
    for hit in &hits {
        let via = matched_field(hit.entry, &needle)
            .map(|field| field.as_str())
            .unwrap_or("-");
        row(&format!(
            "  {} {} {}",
            pad_right(&kind_badge(hit.entry.kind), 16),
            pad_right(&hit.entry.title, 36),
            muted(&format!("{} · {}", hit.score, via))
        ));
    }
    section_bot();
    Ok(())
}

fn run_suggest(json: bool) -> Result<()> {
    if json {
        print_json(&json!({
            "suggested": SUGGESTED_QUERIES,
            "recent": RECENT_SEARCHES,
        }));
        return Ok(());
    }

    section_top("SUGGESTED");
    for query in SUGGESTED_QUERIES {
        row(&format!("  {}", query));
    }
    section_mid("RECENT");
    for query in RECENT_SEARCHES {
        row(&format!("  {}", muted(query)));
    }
    section_bot();
    Ok(())
}
