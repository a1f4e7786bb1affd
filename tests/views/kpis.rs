use super::common::{activity_records, january_2024};
use lxp_insights::{aggregate, chart_series, count_by, daily_counts, Axis, FilterState};

fn january() -> FilterState {
    FilterState {
        date_range: january_2024(),
        ..FilterState::unrestricted()
    }
}

#[test]
fn test_kpis_follow_the_date_window() {
    let kpis = aggregate(&activity_records(), &january(), lxp_insights::summary_kpis);
    // e1, e2, e3 fall in January; e6 is undated and passes
    assert_eq!(kpis["totalRecords"], 4.0);
    assert_eq!(kpis["datedRecords"], 3.0);
    assert_eq!(kpis["distinctProviders"], 2.0);
    assert_eq!(kpis["distinctContentTypes"], 3.0);
    assert_eq!(kpis["distinctSkills"], 3.0);
}

#[test]
fn test_kpis_without_restrictions_see_everything() {
    let kpis = aggregate(
        &activity_records(),
        &FilterState::unrestricted(),
        lxp_insights::summary_kpis,
    );
    assert_eq!(kpis["totalRecords"], 7.0);
    // e6 has no date and e7's date does not parse
    assert_eq!(kpis["datedRecords"], 5.0);
}

#[test]
fn test_daily_series_in_window() {
    let series = chart_series(&activity_records(), &january(), daily_counts);
    let labels: Vec<_> = series.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["2024-01-01", "2024-01-15", "2024-01-31"]);
    assert!(series.iter().all(|p| p.value == 1.0));
}

#[test]
fn test_breakdown_by_provider_after_skill_filter() {
    let mut state = FilterState::unrestricted();
    state.set_axis(Axis::Skills, ["SQL"]);
    let counts = aggregate(&activity_records(), &state, |records| {
        count_by(records, Axis::Provider)
    });
    assert_eq!(counts.get("Coursera"), Some(&2.0));
    assert_eq!(counts.get("Udemy"), Some(&1.0));
    assert_eq!(counts.get("LinkedIn"), None);
}

#[test]
fn test_custom_series_builder() {
    let state = january();
    let ids: Vec<String> = chart_series(&activity_records(), &state, |records| {
        records.iter().filter_map(|r| r.id.clone()).collect()
    });
    assert_eq!(ids, vec!["e1", "e2", "e3", "e6"]);
}
