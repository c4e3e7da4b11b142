//! View queries: full listing, missing-value, unique-value, substring
//! filter and display ordering.
//!
//! # Responsibility
//! - Derive ordered identity sequences and value listings from the
//!   canonical records.
//! - Keep ordering a display concern: identity order in the record set is
//!   never touched.
//!
//! # Invariants
//! - Results are deterministic for a given record set and arguments.
//! - A blank filter pattern short-circuits to the full listing.

use crate::model::record::{display_string, Record, RecordId};
use crate::model::record_set::RecordSet;
use serde_json::Value;
use std::collections::BTreeSet;

/// All records in identity order.
pub fn all(set: &RecordSet) -> Vec<RecordId> {
    set.records().iter().map(Record::identity).collect()
}

/// Records whose column value is absent, `null` or the empty string.
pub fn missing(set: &RecordSet, field: &str) -> Vec<RecordId> {
    set.records()
        .iter()
        .filter(|record| record.display(field).is_empty())
        .map(Record::identity)
        .collect()
}

/// Sorted distinct display values of a column.
///
/// An array value contributes each of its elements individually rather than
/// the array itself; empty and `null` values are excluded. Ordering is
/// lexicographic over the display representation.
pub fn unique(set: &RecordSet, field: &str) -> Vec<String> {
    let mut values = BTreeSet::new();
    for record in set.records() {
        match record.value(field) {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                for item in items {
                    insert_non_empty(&mut values, display_string(item));
                }
            }
            Some(other) => insert_non_empty(&mut values, display_string(other)),
        }
    }
    values.into_iter().collect()
}

/// Records whose column display value contains `pattern`, case-insensitive.
///
/// A blank pattern applies no filtering and returns every record in
/// identity order.
pub fn filter(set: &RecordSet, field: &str, pattern: &str) -> Vec<RecordId> {
    let needle = pattern.trim().to_lowercase();
    if needle.is_empty() {
        return all(set);
    }
    set.records()
        .iter()
        .filter(|record| record.display(field).to_lowercase().contains(&needle))
        .map(Record::identity)
        .collect()
}

/// Reorders a derived identity sequence by one column.
///
/// When every display value in the sequence parses as a floating-point
/// number (the empty string counting as negative infinity), ordering is
/// numeric; a single non-numeric value makes the whole sort lexicographic.
/// The sort is stable, so ties keep their incoming order. Identities not
/// present in the record set are dropped defensively.
pub fn sort_by(set: &RecordSet, ids: &[RecordId], field: &str, descending: bool) -> Vec<RecordId> {
    let entries: Vec<(String, RecordId)> = ids
        .iter()
        .filter_map(|&id| set.get(id).ok().map(|record| (record.display(field), id)))
        .collect();

    let numeric: Option<Vec<f64>> = entries.iter().map(|(text, _)| numeric_key(text)).collect();
    match numeric {
        Some(keys) => {
            let mut keyed: Vec<(f64, RecordId)> = keys
                .into_iter()
                .zip(entries.iter().map(|(_, id)| *id))
                .collect();
            if descending {
                keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
            } else {
                keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
            }
            keyed.into_iter().map(|(_, id)| id).collect()
        }
        None => {
            let mut keyed = entries;
            if descending {
                keyed.sort_by(|a, b| b.0.cmp(&a.0));
            } else {
                keyed.sort_by(|a, b| a.0.cmp(&b.0));
            }
            keyed.into_iter().map(|(_, id)| id).collect()
        }
    }
}

fn numeric_key(text: &str) -> Option<f64> {
    if text.is_empty() {
        return Some(f64::NEG_INFINITY);
    }
    text.parse::<f64>().ok()
}

fn insert_non_empty(values: &mut BTreeSet<String>, text: String) {
    if !text.is_empty() {
        values.insert(text);
    }
}

#[cfg(test)]
mod tests {
    use super::numeric_key;

    #[test]
    fn numeric_key_treats_empty_as_negative_infinity() {
        assert_eq!(numeric_key(""), Some(f64::NEG_INFINITY));
        assert_eq!(numeric_key("2"), Some(2.0));
        assert_eq!(numeric_key("1e3"), Some(1000.0));
        assert_eq!(numeric_key("x"), None);
    }
}
