//! Table inspection session.
//!
//! # Responsibility
//! - Own at most one live record set and route every view, edit, reorder
//!   and save call through it.
//! - Replace the record set wholesale on successful load only.
//!
//! # Invariants
//! - A failed load leaves the previous record set untouched.
//! - Edits land on canonical records; every view derived afterwards
//!   observes them.
//! - Display-originated edits store string values; original value types are
//!   not guessed back.

use crate::model::record::RecordId;
use crate::model::record_set::{ModelError, RecordSet};
use crate::store::{load_document, save_document, LoadError, SaveError};
use crate::view::engine;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type SessionResult<T> = Result<T, SessionError>;

/// Session-level error spanning load, save and record access.
#[derive(Debug)]
pub enum SessionError {
    /// No document has been loaded yet.
    NoDocument,
    /// An edit or lookup referenced an identity absent from the live set.
    RecordNotFound(RecordId),
    Load(LoadError),
    Save(SaveError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDocument => write!(f, "no document loaded"),
            Self::RecordNotFound(identity) => write!(f, "record not found: identity {identity}"),
            Self::Load(err) => write!(f, "{err}"),
            Self::Save(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoDocument | Self::RecordNotFound(_) => None,
            Self::Load(err) => Some(err),
            Self::Save(err) => Some(err),
        }
    }
}

impl From<LoadError> for SessionError {
    fn from(value: LoadError) -> Self {
        Self::Load(value)
    }
}

impl From<SaveError> for SessionError {
    fn from(value: SaveError) -> Self {
        Self::Save(value)
    }
}

impl From<ModelError> for SessionError {
    fn from(value: ModelError) -> Self {
        match value {
            ModelError::NotFound(identity) => Self::RecordNotFound(identity),
        }
    }
}

/// Single live document session: the collaborator surface consumed by
/// UI/CLI layers.
#[derive(Debug, Default)]
pub struct TableSession {
    current: Option<RecordSet>,
}

impl TableSession {
    /// Creates a session with no document loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a document, replacing the live record set only on success.
    pub fn load(&mut self, path: impl AsRef<Path>) -> SessionResult<()> {
        let set = load_document(path)?;
        self.current = Some(set);
        Ok(())
    }

    /// Saves the live record set to a file path.
    pub fn save(&self, path: impl AsRef<Path>) -> SessionResult<()> {
        let set = self.record_set().ok_or(SessionError::NoDocument)?;
        save_document(path, set)?;
        Ok(())
    }

    /// The live record set, when one is loaded.
    pub fn record_set(&self) -> Option<&RecordSet> {
        self.current.as_ref()
    }

    /// Number of records in the live set; zero when none is loaded.
    pub fn record_count(&self) -> usize {
        self.current.as_ref().map_or(0, RecordSet::len)
    }

    /// Overwrites one field of one canonical record with display text.
    pub fn edit(&mut self, identity: RecordId, field: &str, value: &str) -> SessionResult<()> {
        let set = self.current.as_mut().ok_or(SessionError::NoDocument)?;
        set.set_field(identity, field, Value::String(value.to_string()))?;
        Ok(())
    }

    /// Replaces the column order under the documented reorder policy.
    pub fn reorder_columns(&mut self, requested: Vec<String>) -> SessionResult<()> {
        let set = self.current.as_mut().ok_or(SessionError::NoDocument)?;
        set.reorder_columns(requested);
        Ok(())
    }

    /// All records in identity order.
    pub fn all(&self) -> SessionResult<Vec<RecordId>> {
        self.with_set(engine::all)
    }

    /// Records whose column value is absent, `null` or empty.
    pub fn missing(&self, field: &str) -> SessionResult<Vec<RecordId>> {
        self.with_set(|set| engine::missing(set, field))
    }

    /// Sorted distinct display values of a column.
    pub fn unique(&self, field: &str) -> SessionResult<Vec<String>> {
        self.with_set(|set| engine::unique(set, field))
    }

    /// Records matching a case-insensitive substring filter.
    pub fn filter(&self, field: &str, pattern: &str) -> SessionResult<Vec<RecordId>> {
        self.with_set(|set| engine::filter(set, field, pattern))
    }

    /// Reorders a derived identity sequence by one column for display.
    pub fn sort_by(
        &self,
        ids: &[RecordId],
        field: &str,
        descending: bool,
    ) -> SessionResult<Vec<RecordId>> {
        self.with_set(|set| engine::sort_by(set, ids, field, descending))
    }

    fn with_set<T>(&self, op: impl FnOnce(&RecordSet) -> T) -> SessionResult<T> {
        let set = self.record_set().ok_or(SessionError::NoDocument)?;
        Ok(op(set))
    }
}
