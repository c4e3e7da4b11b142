use jsontable_core::view::engine::{all, filter, missing, sort_by, unique};
use jsontable_core::{normalize, RecordSet};
use serde_json::{json, Value};

fn set_from(document: Value) -> RecordSet {
    normalize(&document).unwrap()
}

#[test]
fn missing_matches_absent_null_and_empty_only() {
    let set = set_from(json!([
        {"name": "a", "tag": ""},
        {"name": "b", "tag": null},
        {"name": "c"},
        {"name": "d", "tag": "x"},
        {"name": "e", "tag": 0}
    ]));

    assert_eq!(missing(&set, "tag"), [0, 1, 2]);
    assert!(missing(&set, "name").is_empty());
}

#[test]
fn unique_flattens_arrays_dedupes_and_sorts() {
    let set = set_from(json!([
        {"tags": ["a", "b"]},
        {"tags": ["b"]},
        {"tags": null},
        {"tags": ""},
        {}
    ]));

    assert_eq!(unique(&set, "tags"), ["a", "b"]);
}

#[test]
fn unique_stringifies_scalar_values() {
    let set = set_from(json!([
        {"n": 10},
        {"n": 2},
        {"n": 10},
        {"n": true}
    ]));

    assert_eq!(unique(&set, "n"), ["10", "2", "true"]);
}

#[test]
fn filter_is_case_insensitive_substring_match() {
    let set = set_from(json!([
        {"name": "Alpha"},
        {"name": "beta"},
        {"name": "ALPHABET"}
    ]));

    assert_eq!(filter(&set, "name", "alpha"), [0, 2]);
    assert_eq!(filter(&set, "name", " BETA "), [1]);
    assert_eq!(filter(&set, "name", "HAB"), [2]);
}

#[test]
fn blank_filter_pattern_returns_all_records() {
    let set = set_from(json!([{"name": "a"}, {"name": "b"}]));
    assert_eq!(filter(&set, "name", ""), [0, 1]);
    assert_eq!(filter(&set, "name", "   "), [0, 1]);
}

#[test]
fn sort_is_numeric_when_every_value_parses() {
    let set = set_from(json!([{"v": "10"}, {"v": "2"}, {"v": "9"}]));
    let ids = all(&set);

    assert_eq!(sort_by(&set, &ids, "v", false), [1, 2, 0]);
    assert_eq!(sort_by(&set, &ids, "v", true), [0, 2, 1]);
}

#[test]
fn sort_falls_back_to_lexicographic_on_one_bad_value() {
    let set = set_from(json!([{"v": "10"}, {"v": "x"}, {"v": "9"}]));
    let ids = all(&set);

    assert_eq!(sort_by(&set, &ids, "v", false), [0, 2, 1]);
}

#[test]
fn sort_treats_missing_values_as_negative_infinity() {
    let set = set_from(json!([{"v": "5"}, {}, {"v": "-3"}]));
    let ids = all(&set);

    assert_eq!(sort_by(&set, &ids, "v", false), [1, 2, 0]);
}

#[test]
fn sort_accepts_json_numbers_alongside_numeric_strings() {
    let set = set_from(json!([{"v": 10}, {"v": "2"}, {"v": 9.5}]));
    let ids = all(&set);

    assert_eq!(sort_by(&set, &ids, "v", false), [1, 2, 0]);
}

#[test]
fn sort_reorders_only_the_given_sequence() {
    let set = set_from(json!([{"v": "3"}, {"v": "1"}, {"v": "2"}]));

    let subset = [2, 0];
    assert_eq!(sort_by(&set, &subset, "v", false), [2, 0]);

    // The canonical identity order is untouched by any sort.
    assert_eq!(all(&set), [0, 1, 2]);
}

#[test]
fn views_observe_edits_made_after_their_inputs_were_derived() {
    let mut set = set_from(json!([{"name": "old"}, {"name": "other"}]));
    set.set_field(0, "name", json!("renamed")).unwrap();

    assert_eq!(filter(&set, "name", "renamed"), [0]);
    assert!(filter(&set, "name", "old").is_empty());
    assert_eq!(unique(&set, "name"), ["other", "renamed"]);
}
