//! Canonical in-memory record set.
//!
//! # Responsibility
//! - Hold identity-indexed records, the column order and the source shape.
//! - Apply field edits to canonical records so every derived view observes
//!   them.
//!
//! # Invariants
//! - `records[i].identity() == i` for every index, dense from zero.
//! - `columns` is reordered only as a whole; record contents are never
//!   touched by column operations.
//! - Shape is fixed at construction and reused verbatim at save.

use crate::model::record::{Record, RecordId, Shape};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelError>;

/// Error for identity lookups against the canonical records.
#[derive(Debug)]
pub enum ModelError {
    /// The identity is not present in the current record set. Callers that
    /// obtain identities from views never hit this; it is a defensive check.
    NotFound(RecordId),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(identity) => write!(f, "record not found: identity {identity}"),
        }
    }
}

impl Error for ModelError {}

/// Identity-indexed records plus column order and shape metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    shape: Shape,
    records: Vec<Record>,
    columns: Vec<String>,
}

impl RecordSet {
    /// Assembles a record set from normalization output.
    ///
    /// # Invariants
    /// - `records` must already carry dense zero-based identities matching
    ///   their positions.
    pub fn new(shape: Shape, records: Vec<Record>, columns: Vec<String>) -> Self {
        debug_assert!(records
            .iter()
            .enumerate()
            .all(|(index, record)| record.identity() == index));
        Self {
            shape,
            records,
            columns,
        }
    }

    /// Top-level container kind of the source document.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Canonical records in identity order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Current column order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of canonical records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a canonical record by identity.
    pub fn get(&self, identity: RecordId) -> ModelResult<&Record> {
        self.records
            .get(identity)
            .ok_or(ModelError::NotFound(identity))
    }

    /// Overwrites one field of the canonical record named by `identity`.
    ///
    /// A previously unseen field name is stored on the record but does not
    /// extend `columns`; it only becomes a discoverable column on reload.
    pub fn set_field(&mut self, identity: RecordId, field: &str, value: Value) -> ModelResult<()> {
        let record = self
            .records
            .get_mut(identity)
            .ok_or(ModelError::NotFound(identity))?;
        record.set_value(field, value);
        Ok(())
    }

    /// Replaces the column order.
    ///
    /// Policy: names unknown to the current columns are silently ignored;
    /// current columns absent from the request are appended at the end in
    /// their current relative order. Record contents are never touched.
    pub fn reorder_columns(&mut self, requested: Vec<String>) {
        let mut next = Vec::with_capacity(self.columns.len());
        for name in requested {
            if self.columns.contains(&name) && !next.contains(&name) {
                next.push(name);
            }
        }
        for name in &self.columns {
            if !next.contains(name) {
                next.push(name.clone());
            }
        }
        self.columns = next;
    }
}

#[cfg(test)]
mod tests {
    use super::{ModelError, RecordSet};
    use crate::model::record::{Record, Shape};
    use serde_json::{json, Map};

    fn two_record_set() -> RecordSet {
        let mut fields_a = Map::new();
        fields_a.insert("name".to_string(), json!("first"));
        let mut fields_b = Map::new();
        fields_b.insert("name".to_string(), json!("second"));
        RecordSet::new(
            Shape::ArrayOfObjects,
            vec![
                Record::new(0, None, fields_a),
                Record::new(1, None, fields_b),
            ],
            vec!["name".to_string()],
        )
    }

    #[test]
    fn get_out_of_range_is_not_found() {
        let set = two_record_set();
        assert!(matches!(set.get(7), Err(ModelError::NotFound(7))));
    }

    #[test]
    fn set_field_does_not_extend_columns() {
        let mut set = two_record_set();
        set.set_field(0, "added", json!("later")).unwrap();
        assert_eq!(set.columns(), ["name"]);
        assert_eq!(set.get(0).unwrap().value("added"), Some(&json!("later")));
    }

    #[test]
    fn reorder_ignores_unknown_names_and_appends_missing_ones() {
        let mut set = two_record_set();
        set.reorder_columns(vec!["bogus".to_string()]);
        assert_eq!(set.columns(), ["name"]);
    }
}
