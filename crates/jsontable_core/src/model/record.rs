//! Record domain model.
//!
//! # Responsibility
//! - Define the canonical tabular row derived from one JSON object.
//! - Keep the identifying value in a dedicated slot instead of a magic
//!   field name, so ordinary fields can never collide with it.
//!
//! # Invariants
//! - `identity` is stable for the lifetime of the owning record set and is
//!   never reused or reassigned by filtering, sorting or saving.
//! - `fields` never contains an entry named [`ID_KEY_COLUMN`]; source
//!   documents carrying one are rejected during normalization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stable identifier for every record within one record set.
///
/// Assigned densely from zero at normalization time, in load order.
pub type RecordId = usize;

/// Display name of the identity column.
///
/// The identifying value lives in [`Record::id_key`], not under this field
/// name; the constant only names the column through which views and edits
/// address that slot.
pub const ID_KEY_COLUMN: &str = "ID key";

/// Top-level container kind of the source document.
///
/// Fixed at load time and reused verbatim at save time, so the output is
/// structurally indistinguishable in shape from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// The document is a JSON object mapping identifying keys to rows.
    ObjectKeyed,
    /// The document is a JSON array of row objects.
    ArrayOfObjects,
}

impl Shape {
    /// Stable lower-case token used in logging and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ObjectKeyed => "object_keyed",
            Self::ArrayOfObjects => "array_of_objects",
        }
    }
}

/// One tabular row: ordered fields plus an optional identifying value.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    identity: RecordId,
    id_key: Option<Value>,
    fields: Map<String, Value>,
}

impl Record {
    /// Creates a record with its stable identity and identifying value.
    ///
    /// # Invariants
    /// - `fields` must not contain an [`ID_KEY_COLUMN`] entry; normalization
    ///   rejects such input before this constructor runs.
    pub fn new(identity: RecordId, id_key: Option<Value>, fields: Map<String, Value>) -> Self {
        Self {
            identity,
            id_key,
            fields,
        }
    }

    /// Stable identity within the owning record set.
    pub fn identity(&self) -> RecordId {
        self.identity
    }

    /// Identifying value used to reconstruct the original key on save.
    pub fn id_key(&self) -> Option<&Value> {
        self.id_key.as_ref()
    }

    /// Ordinary fields in source order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Looks up a value by column name.
    ///
    /// [`ID_KEY_COLUMN`] routes to the identity slot; any other name reads
    /// the ordinary fields.
    pub fn value(&self, field: &str) -> Option<&Value> {
        if field == ID_KEY_COLUMN {
            self.id_key.as_ref()
        } else {
            self.fields.get(field)
        }
    }

    /// Overwrites a value by column name, creating the field when absent.
    ///
    /// Writing [`ID_KEY_COLUMN`] replaces the identity slot.
    pub fn set_value(&mut self, field: &str, value: Value) {
        if field == ID_KEY_COLUMN {
            self.id_key = Some(value);
        } else {
            self.fields.insert(field.to_string(), value);
        }
    }

    /// Display text for a column: absent and `null` render empty.
    pub fn display(&self, field: &str) -> String {
        self.value(field).map(display_string).unwrap_or_default()
    }
}

/// Canonical display text for a JSON value.
///
/// Strings render bare, `null` renders empty, everything else renders as
/// compact JSON. Filtering, uniqueness and sorting all operate on this
/// representation.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{display_string, Record, ID_KEY_COLUMN};
    use serde_json::{json, Map};

    #[test]
    fn display_string_renders_scalars_without_quotes() {
        assert_eq!(display_string(&json!("plain")), "plain");
        assert_eq!(display_string(&json!(10)), "10");
        assert_eq!(display_string(&json!(1.5)), "1.5");
        assert_eq!(display_string(&json!(true)), "true");
        assert_eq!(display_string(&json!(null)), "");
    }

    #[test]
    fn display_string_renders_containers_as_compact_json() {
        assert_eq!(display_string(&json!(["a", "b"])), r#"["a","b"]"#);
        assert_eq!(display_string(&json!({"x": 1})), r#"{"x":1}"#);
    }

    #[test]
    fn id_key_column_routes_to_identity_slot() {
        let mut record = Record::new(0, Some(json!("alpha")), Map::new());
        assert_eq!(record.value(ID_KEY_COLUMN), Some(&json!("alpha")));
        assert_eq!(record.display(ID_KEY_COLUMN), "alpha");

        record.set_value(ID_KEY_COLUMN, json!("beta"));
        assert_eq!(record.id_key(), Some(&json!("beta")));
        assert!(record.fields().is_empty());
    }

    #[test]
    fn absent_field_displays_empty() {
        let record = Record::new(0, None, Map::new());
        assert_eq!(record.display("anything"), "");
        assert_eq!(record.value("anything"), None);
    }
}
