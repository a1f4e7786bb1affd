use super::common::{activity_records, ids};
use lxp_insights::{filter_records, paginate, Axis, Error, FilterState};

#[test]
fn test_pages_cover_filtered_records_in_order() {
    let mut state = FilterState::unrestricted();
    state.set_axis(Axis::ContentType, ["Course"]);
    let filtered = filter_records(&activity_records(), &state);
    assert_eq!(ids(&filtered), vec!["e1", "e3", "e5", "e7"]);

    let first = paginate(&filtered, 1, 3).unwrap();
    let second = paginate(&filtered, 2, 3).unwrap();
    assert_eq!(ids(&first.items), vec!["e1", "e3", "e5"]);
    assert_eq!(ids(&second.items), vec!["e7"]);
    assert_eq!(first.total_pages, 2);
    assert!(first.has_next());
    assert!(!second.has_next());
}

#[test]
fn test_page_serializes_camel_case() {
    let page = paginate(&activity_records(), 1, 2).unwrap();
    let value = serde_json::to_value(&page).unwrap();
    assert_eq!(value["pageSize"], 2);
    assert_eq!(value["totalItems"], 7);
    assert_eq!(value["totalPages"], 4);
    assert_eq!(value["items"][0]["id"], "e1");
}

#[test]
fn test_zero_page_size_is_rejected() {
    let err = paginate(&activity_records(), 1, 0).unwrap_err();
    assert!(matches!(err, Error::InvalidPageSize));
}
