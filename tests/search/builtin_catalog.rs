//! Queries against the catalog the product ships with.

use lxp_insights::catalog::{builtin_catalog, SUGGESTED_QUERIES};
use lxp_insights::{search, EntryKind, LexicalSearchRanker};

#[test]
fn test_dashboard_query_is_capped() {
    let catalog = builtin_catalog();
    let all = search(&catalog, "dashboard", 100);
    assert!(all.len() > 2, "expected several dashboards, got {}", all.len());
    assert_eq!(search(&catalog, "dashboard", 2).len(), 2);
}

#[test]
fn test_synonym_reaches_metric() {
    let ranker = LexicalSearchRanker::builtin();
    let hits = ranker.search("finish rate", 10);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].entry.kind, EntryKind::Metric);
    assert_eq!(hits[0].entry.title, "Completion Rate");
}

#[test]
fn test_results_are_sorted_by_title() {
    let ranker = LexicalSearchRanker::builtin();
    let hits = ranker.search("kpi", 10);
    let titles: Vec<_> = hits.iter().map(|h| h.entry.title.to_lowercase()).collect();
    let mut sorted = titles.clone();
    sorted.sort();
    assert_eq!(titles, sorted);
    assert_eq!(hits.len(), 3);
}

#[test]
fn test_suggested_queries_are_plain_data() {
    // Suggestions are not derived from the ranker; some may match nothing.
    let ranker = LexicalSearchRanker::builtin();
    for query in SUGGESTED_QUERIES {
        let _ = ranker.search(query, 10);
    }
}

#[test]
fn test_json_shape_of_hits() {
    let catalog = builtin_catalog();
    let hits = search(&catalog, "heatmap", 10);
    let value = serde_json::to_value(&hits).unwrap();
    assert_eq!(value[0]["id"], "viz-skill-heatmap");
    assert_eq!(value[0]["type"], "visualization");
    assert_eq!(value[0]["score"], 100);
}
