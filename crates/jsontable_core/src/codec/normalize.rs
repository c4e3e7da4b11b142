//! Shape detection and document normalization.
//!
//! # Responsibility
//! - Classify the top-level container of a parsed document.
//! - Flatten it into identity-indexed records with a deterministic
//!   first-seen column order.
//!
//! # Invariants
//! - Identities are assigned densely from zero over surviving entries;
//!   skipped entries do not consume one.
//! - Column order is deterministic given the document's own field order.
//! - Non-object entries are dropped silently (logged at debug), never
//!   raised.

use crate::codec::{NormalizeError, NormalizeResult, ARRAY_KEY_FIELD};
use crate::model::record::{Record, Shape, ID_KEY_COLUMN};
use crate::model::record_set::RecordSet;
use log::debug;
use serde_json::Value;

/// Classifies a parsed JSON value by its top-level container.
///
/// An object is [`Shape::ObjectKeyed`]; anything else is treated as
/// [`Shape::ArrayOfObjects`] and non-arrays simply normalize to zero
/// records. There is no error path.
pub fn detect_shape(document: &Value) -> Shape {
    if document.is_object() {
        Shape::ObjectKeyed
    } else {
        Shape::ArrayOfObjects
    }
}

/// Normalizes a parsed document using its detected shape.
pub fn normalize(document: &Value) -> NormalizeResult<RecordSet> {
    normalize_with_shape(document, detect_shape(document))
}

/// Normalizes a parsed document into the canonical record set.
///
/// - Object-keyed: every `(key, inner-object)` pair becomes a record whose
///   identity slot holds the outer key; pairs with non-object values are
///   skipped.
/// - Array-of-objects: every object element becomes a record; a field named
///   `key` moves into the identity slot; non-object elements are skipped.
///
/// # Errors
/// Returns [`NormalizeError::ReservedField`] when a source row carries a
/// literal `ID key` field, which the canonical model cannot represent
/// without guessing.
pub fn normalize_with_shape(document: &Value, shape: Shape) -> NormalizeResult<RecordSet> {
    let records = match shape {
        Shape::ObjectKeyed => collect_object_keyed(document)?,
        Shape::ArrayOfObjects => collect_array(document)?,
    };
    let columns = discover_columns(shape, &records);
    Ok(RecordSet::new(shape, records, columns))
}

fn collect_object_keyed(document: &Value) -> NormalizeResult<Vec<Record>> {
    let mut records = Vec::new();
    let Some(outer) = document.as_object() else {
        return Ok(records);
    };

    for (key, inner) in outer {
        let Some(fields) = inner.as_object() else {
            debug!("event=entry_skipped module=codec reason=non_object_value key={key}");
            continue;
        };
        if fields.contains_key(ID_KEY_COLUMN) {
            return Err(NormalizeError::ReservedField {
                entry: format!("object entry `{key}`"),
            });
        }
        records.push(Record::new(
            records.len(),
            Some(Value::String(key.clone())),
            fields.clone(),
        ));
    }

    Ok(records)
}

fn collect_array(document: &Value) -> NormalizeResult<Vec<Record>> {
    let mut records = Vec::new();
    let Some(items) = document.as_array() else {
        return Ok(records);
    };

    for (position, item) in items.iter().enumerate() {
        let Some(object) = item.as_object() else {
            debug!("event=entry_skipped module=codec reason=non_object_element position={position}");
            continue;
        };
        if object.contains_key(ID_KEY_COLUMN) {
            return Err(NormalizeError::ReservedField {
                entry: format!("array element {position}"),
            });
        }
        let mut fields = object.clone();
        // shift_remove keeps the relative order of the remaining fields.
        let id_key = fields.shift_remove(ARRAY_KEY_FIELD);
        records.push(Record::new(records.len(), id_key, fields));
    }

    Ok(records)
}

/// First-seen union of column names across records, in record order then
/// field order within a record.
///
/// The identity column takes the position the original in-place rename
/// produced: first for object-keyed rows, after the other fields of the
/// first keyed row for array-shaped documents.
fn discover_columns(shape: Shape, records: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        match shape {
            Shape::ObjectKeyed => {
                push_unique(&mut columns, ID_KEY_COLUMN);
                for name in record.fields().keys() {
                    push_unique(&mut columns, name);
                }
            }
            Shape::ArrayOfObjects => {
                for name in record.fields().keys() {
                    push_unique(&mut columns, name);
                }
                if record.id_key().is_some() {
                    push_unique(&mut columns, ID_KEY_COLUMN);
                }
            }
        }
    }
    columns
}

fn push_unique(columns: &mut Vec<String>, name: &str) {
    if !columns.iter().any(|existing| existing == name) {
        columns.push(name.to_string());
    }
}
