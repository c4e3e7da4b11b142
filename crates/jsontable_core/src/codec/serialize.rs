//! Record-set serialization back into a raw document.
//!
//! # Responsibility
//! - Rebuild a JSON value matching the shape detected at load.
//! - Restore the identifying value to its original convention: outer map
//!   key for object-keyed documents, a `key` field for array documents.
//!
//! # Invariants
//! - Serialization never fails for a structurally valid record set; records
//!   that cannot be placed (object shape, no identity value) are dropped
//!   and logged.

use crate::codec::ARRAY_KEY_FIELD;
use crate::model::record::{display_string, Shape};
use crate::model::record_set::RecordSet;
use log::{debug, warn};
use serde_json::{Map, Value};

/// Converts a record set back into a raw document of its original shape.
pub fn serialize(set: &RecordSet) -> Value {
    match set.shape() {
        Shape::ObjectKeyed => serialize_object_keyed(set),
        Shape::ArrayOfObjects => serialize_array(set),
    }
}

fn serialize_object_keyed(set: &RecordSet) -> Value {
    let mut outer = Map::new();
    for record in set.records() {
        let Some(id_key) = record.id_key() else {
            debug!(
                "event=record_dropped module=codec reason=no_identity_value identity={}",
                record.identity()
            );
            continue;
        };
        // JSON object keys must be strings; edited identity values already
        // are, loaded ones always were.
        let outer_key = match id_key {
            Value::String(text) => text.clone(),
            other => display_string(other),
        };
        outer.insert(outer_key, Value::Object(record.fields().clone()));
    }
    Value::Object(outer)
}

fn serialize_array(set: &RecordSet) -> Value {
    let mut items = Vec::with_capacity(set.len());
    for record in set.records() {
        let mut object = record.fields().clone();
        if let Some(id_key) = record.id_key() {
            if object.shift_remove(ARRAY_KEY_FIELD).is_some() {
                warn!(
                    "event=key_collision module=codec identity={} policy=identity_slot_wins",
                    record.identity()
                );
            }
            object.insert(ARRAY_KEY_FIELD.to_string(), id_key.clone());
        }
        items.push(Value::Object(object));
    }
    Value::Array(items)
}
