//! Document codec: shape detection, normalization and serialization.
//!
//! # Responsibility
//! - Convert raw parsed JSON into the canonical record set and back.
//! - Confine the `key` / identity-slot rename to this format boundary; the
//!   model layer never sees the convention.
//!
//! # Invariants
//! - Serialization is the structural inverse of normalization for the
//!   detected shape, modulo entries skipped at load.
//! - Malformed entries are dropped, not raised; the only load-time rejection
//!   is a source field colliding with the reserved identity column name.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod normalize;
pub mod serialize;

pub use normalize::{detect_shape, normalize, normalize_with_shape};
pub use serialize::serialize;

/// Field name that conveys the identifying value in array-shaped documents.
pub const ARRAY_KEY_FIELD: &str = "key";

pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Error for documents the canonical model cannot represent faithfully.
#[derive(Debug)]
pub enum NormalizeError {
    /// A source row carries a literal `ID key` field. The original behavior
    /// silently merged it with the synthesized identity; here the document
    /// is rejected outright so no information is lost by guessing.
    ReservedField { entry: String },
}

impl Display for NormalizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReservedField { entry } => write!(
                f,
                "incompatible input: {entry} carries a field named `{}`, which is reserved for the identity column",
                crate::model::record::ID_KEY_COLUMN
            ),
        }
    }
}

impl Error for NormalizeError {}
