use std::fs;
use std::path::Path;

use super::common::{day, ids};
use lxp_insights::load::{load_dataset, DEFAULT_PAGE_SIZE};
use lxp_insights::{filter_records, search, Axis};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn sample_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "manifest.json",
        r#"{
            "version": 1,
            "records": ["first.json", "second.json"],
            "catalog": "catalog.json",
            "filters": "filters.json",
            "pageSize": 5
        }"#,
    );
    write(
        dir.path(),
        "first.json",
        r#"[
            {"id": "a1", "date": "2024-01-02", "contentType": "Course", "provider": "Coursera", "skills": ["SQL"], "learner": "ana"},
            {"id": "a2", "date": "2024-01-20T08:00:00Z", "contentType": "Video"}
        ]"#,
    );
    write(
        dir.path(),
        "second.json",
        r#"[
            {"id": "b1", "contentType": "Course", "groups": ["Sales"], "customAttribute": ["EMEA"]}
        ]"#,
    );
    write(
        dir.path(),
        "catalog.json",
        r#"[
            {"id": "m1", "type": "metric", "title": "Seat Utilization", "tags": ["licenses"]},
            {"id": "d1", "type": "dashboard", "title": "Licensing Dashboard", "description": "Seats and licenses"}
        ]"#,
    );
    write(
        dir.path(),
        "filters.json",
        r#"{"dateRange": {"from": "2024-01-01", "to": "2024-01-10"}, "contentType": ["Course"]}"#,
    );
    dir
}

#[test]
fn test_records_concatenate_in_manifest_order() {
    let dir = sample_dir();
    let dataset = load_dataset(dir.path()).unwrap();
    assert_eq!(ids(&dataset.records), vec!["a1", "a2", "b1"]);
    assert_eq!(dataset.page_size, 5);
    assert_eq!(dataset.skipped_records, 0);
}

#[test]
fn test_unknown_record_fields_are_kept() {
    let dir = sample_dir();
    let dataset = load_dataset(dir.path()).unwrap();
    assert_eq!(dataset.records[0].extra["learner"], "ana");
    assert_eq!(
        dataset.records[2].custom_attribute.as_deref(),
        Some(&["EMEA".to_string()][..])
    );
}

#[test]
fn test_saved_filters_apply() {
    let dir = sample_dir();
    let dataset = load_dataset(dir.path()).unwrap();
    let state = dataset.filters.unwrap();
    assert_eq!(state.date_range.bounds(), Some((day(2024, 1, 1), day(2024, 1, 10))));
    assert_eq!(state.active_axes(), vec![Axis::Date, Axis::ContentType]);

    // a2 is a Video; b1 is an undated Course
    let filtered = filter_records(&dataset.records, &state);
    assert_eq!(ids(&filtered), vec!["a1", "b1"]);
}

#[test]
fn test_custom_catalog_is_searchable() {
    let dir = sample_dir();
    let catalog = load_dataset(dir.path()).unwrap().catalog.unwrap();
    let hits = search(&catalog, "licens", 10);
    let titles: Vec<_> = hits.iter().map(|h| h.entry.title.as_str()).collect();
    assert_eq!(titles, vec!["Licensing Dashboard", "Seat Utilization"]);
}

#[test]
fn test_minimal_manifest_uses_defaults() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "manifest.json", r#"{"version": 1}"#);
    let dataset = load_dataset(dir.path()).unwrap();
    assert!(dataset.records.is_empty());
    assert!(dataset.catalog.is_none());
    assert!(dataset.filters.is_none());
    assert_eq!(dataset.page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn test_zero_page_size_in_manifest_is_clamped() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "manifest.json", r#"{"version": 1, "pageSize": 0}"#);
    assert_eq!(load_dataset(dir.path()).unwrap().page_size, 1);
}

#[test]
fn test_saved_filters_accept_date_time_bounds() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "manifest.json",
        r#"{"version": 1, "records": ["r.json"], "filters": "filters.json"}"#,
    );
    write(
        dir.path(),
        "r.json",
        r#"[{"id": "in", "date": "2024-01-31T18:00:00Z"}, {"id": "out", "date": "2024-02-01"}]"#,
    );
    write(
        dir.path(),
        "filters.json",
        r#"{"dateRange": {"from": "2024-01-01T00:00:00.000Z", "to": "2024-01-31T00:00:00.000Z"}}"#,
    );

    let dataset = load_dataset(dir.path()).unwrap();
    let state = dataset.filters.unwrap();
    assert_eq!(state.date_range.bounds(), Some((day(2024, 1, 1), day(2024, 1, 31))));
    assert_eq!(ids(&filter_records(&dataset.records, &state)), vec!["in"]);
}
