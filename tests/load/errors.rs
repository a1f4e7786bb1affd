use std::fs;

use lxp_insights::load::{load_dataset, read_manifest, MANIFEST_VERSION};
use lxp_insights::Error;
use tempfile::TempDir;

#[test]
fn test_missing_manifest_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_dataset(dir.path()).unwrap_err();
    match err {
        Error::Io { path, .. } => assert!(path.ends_with("manifest.json")),
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn test_unsupported_version() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("manifest.json"), r#"{"version": 7}"#).unwrap();
    let err = read_manifest(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedVersion { found: 7, expected } if expected == MANIFEST_VERSION
    ));
    assert!(err.to_string().contains('7'));
}

#[test]
fn test_malformed_record_file_names_the_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{"version": 1, "records": ["broken.json"]}"#,
    )
    .unwrap();
    fs::write(dir.path().join("broken.json"), "[{\"id\": ").unwrap();

    match load_dataset(dir.path()).unwrap_err() {
        Error::Json { path, .. } => assert!(path.ends_with("broken.json")),
        other => panic!("expected json error, got {:?}", other),
    }
}

#[test]
fn test_missing_record_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{"version": 1, "records": ["gone.json"]}"#,
    )
    .unwrap();
    assert!(matches!(load_dataset(dir.path()), Err(Error::Io { .. })));
}

#[test]
fn test_bad_date_in_saved_filters_is_json_error() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{"version": 1, "filters": "filters.json"}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("filters.json"),
        r#"{"dateRange": {"from": "January"}}"#,
    )
    .unwrap();
    assert!(matches!(load_dataset(dir.path()), Err(Error::Json { .. })));
}

#[test]
fn test_malformed_rows_are_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{"version": 1, "records": ["a.json", "b.json"]}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("a.json"),
        r#"[
            {"id": "good", "date": "2024-01-05"},
            {"id": "bad", "date": 20240105},
            {"id": "bad2", "skills": "SQL"}
        ]"#,
    )
    .unwrap();
    fs::write(dir.path().join("b.json"), r#"[{"id": "later"}, 42]"#).unwrap();

    let dataset = load_dataset(dir.path()).unwrap();
    let ids: Vec<_> = dataset
        .records
        .iter()
        .filter_map(|r| r.id.as_deref())
        .collect();
    assert_eq!(ids, vec!["good", "later"]);
    assert_eq!(dataset.skipped_records, 3);
}

#[test]
fn test_records_file_must_be_an_array() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("manifest.json"),
        r#"{"version": 1, "records": ["object.json"]}"#,
    )
    .unwrap();
    fs::write(dir.path().join("object.json"), r#"{"id": "solo"}"#).unwrap();

    match load_dataset(dir.path()).unwrap_err() {
        Error::Json { path, .. } => assert!(path.ends_with("object.json")),
        other => panic!("expected json error, got {:?}", other),
    }
}
