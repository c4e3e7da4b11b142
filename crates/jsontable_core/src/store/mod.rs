//! Document persistence entry points.
//!
//! # Responsibility
//! - Own the file-backed load/save collaborator surface of the core.
//! - Keep the error taxonomy narrow: I/O and parse failures surface
//!   verbatim, skipped entries do not.
//!
//! # Invariants
//! - A failed load produces no partial record set.
//! - Saved output is UTF-8, pretty-printed with 2-space indentation,
//!   non-ASCII preserved unescaped.

use crate::codec::NormalizeError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;

pub use file::{load_document, save_document};

pub type LoadResult<T> = Result<T, LoadError>;
pub type SaveResult<T> = Result<T, SaveError>;

/// Error for reading and normalizing a document.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file content is not valid JSON.
    Parse(serde_json::Error),
    /// The document cannot be represented in the canonical model.
    Normalize(NormalizeError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read document: {err}"),
            Self::Parse(err) => write!(f, "failed to parse document: {err}"),
            Self::Normalize(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Normalize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<NormalizeError> for LoadError {
    fn from(value: NormalizeError) -> Self {
        Self::Normalize(value)
    }
}

/// Error for serializing and writing a document.
#[derive(Debug)]
pub enum SaveError {
    /// The file could not be written.
    Io(std::io::Error),
    /// The record set could not be rendered as JSON text.
    Serialize(serde_json::Error),
}

impl Display for SaveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to write document: {err}"),
            Self::Serialize(err) => write!(f, "failed to render document: {err}"),
        }
    }
}

impl Error for SaveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
