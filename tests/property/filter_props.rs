use std::collections::BTreeSet;

use chrono::NaiveDate;
use lxp_insights::{filter_records, record_passes, Axis, DateRange, FilterState, FilterableRecord};
use proptest::prelude::*;

fn pick(values: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(values).prop_map(String::from)
}

fn date_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("garbage".to_string())),
        (1u32..=12, 1u32..=28).prop_map(|(m, d)| Some(format!("2024-{:02}-{:02}", m, d))),
        (1u32..=12, 1u32..=28, 0u32..24)
            .prop_map(|(m, d, h)| Some(format!("2024-{:02}-{:02}T{:02}:15:00Z", m, d, h))),
    ]
}

fn tag_list(values: &'static [&'static str]) -> impl Strategy<Value = Option<Vec<String>>> {
    prop::option::of(prop::collection::vec(pick(values), 0..3))
}

const TYPES: &[&str] = &["Course", "Video", "Article"];
const PROVIDERS: &[&str] = &["Coursera", "Udemy", "LinkedIn"];
const SKILLS: &[&str] = &["SQL", "Python", "Java"];
const GROUPS: &[&str] = &["Sales", "Engineering"];

fn record_strategy() -> impl Strategy<Value = FilterableRecord> {
    (
        "[a-z]{6}",
        date_strategy(),
        prop::option::of(pick(TYPES)),
        prop::option::of(pick(PROVIDERS)),
        tag_list(SKILLS),
        tag_list(GROUPS),
    )
        .prop_map(|(id, date, content_type, provider, skills, groups)| FilterableRecord {
            id: Some(id),
            date,
            content_type,
            provider,
            skills,
            groups,
            ..FilterableRecord::default()
        })
}

fn subset(values: &'static [&'static str]) -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(pick(values), 0..=values.len())
}

fn state_strategy() -> impl Strategy<Value = FilterState> {
    (
        prop::option::of((1u32..=12, 1u32..=28, 0i64..90)),
        subset(TYPES),
        subset(PROVIDERS),
        subset(SKILLS),
        subset(GROUPS),
    )
        .prop_map(|(range, content_type, provider, skills, groups)| {
            let date_range = range
                .and_then(|(m, d, span)| {
                    let from = NaiveDate::from_ymd_opt(2024, m, d)?;
                    Some(DateRange::new(from, from + chrono::Duration::days(span)))
                })
                .unwrap_or_default();
            FilterState {
                date_range,
                content_type,
                provider,
                skills,
                groups,
                ..FilterState::unrestricted()
            }
        })
}

fn records() -> impl Strategy<Value = Vec<FilterableRecord>> {
    prop::collection::vec(record_strategy(), 0..60)
}

proptest! {
    /// Property: the unrestricted state lets every record through unchanged.
    #[test]
    fn prop_unrestricted_is_identity(records in records()) {
        prop_assert_eq!(filter_records(&records, &FilterState::unrestricted()), records);
    }

    /// Property: filtering twice with the same state changes nothing.
    #[test]
    fn prop_idempotent(records in records(), state in state_strategy()) {
        let once = filter_records(&records, &state);
        let twice = filter_records(&once, &state);
        prop_assert_eq!(once, twice);
    }

    /// Property: output is an order-preserving subsequence of the input.
    #[test]
    fn prop_preserves_order(records in records(), state in state_strategy()) {
        let filtered = filter_records(&records, &state);
        let mut input = records.iter();
        for kept in &filtered {
            prop_assert!(input.any(|r| r == kept), "output is not a subsequence of input");
        }
    }

    /// Property: a record survives exactly when it passes each axis on its own.
    #[test]
    fn prop_axes_are_conjunctive(records in records(), state in state_strategy()) {
        for record in &records {
            let per_axis = Axis::ALL.iter().all(|&axis| {
                let mut single = FilterState::unrestricted();
                match axis {
                    Axis::Date => single.date_range = state.date_range,
                    _ => {
                        if let Some(values) = state.values(axis) {
                            single.set_axis(axis, values.iter().cloned());
                        }
                    }
                }
                record_passes(record, &single)
            });
            prop_assert_eq!(record_passes(record, &state), per_axis);
        }
    }

    /// Property: adding a restriction never lets more records through.
    #[test]
    fn prop_narrowing_is_monotone(records in records(), state in state_strategy(), skill in pick(SKILLS)) {
        let mut narrower = state.clone();
        if narrower.skills.is_empty() {
            narrower.skills.insert(skill);
        } else {
            narrower.skills = narrower.skills.iter().take(1).cloned().collect();
        }
        let wide = filter_records(&records, &state);
        let narrow = filter_records(&records, &narrower);
        prop_assert!(narrow.len() <= wide.len());
        prop_assert!(narrow.iter().all(|r| wide.contains(r)));
    }
}

#[cfg(feature = "parallel")]
proptest! {
    /// Property: the rayon path returns exactly what the sequential path does.
    #[test]
    fn prop_parallel_matches_sequential(records in records(), state in state_strategy()) {
        prop_assert_eq!(
            lxp_insights::filter_records_parallel(&records, &state),
            filter_records(&records, &state)
        );
    }
}
