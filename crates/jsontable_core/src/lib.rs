//! Normalization / round-trip engine for JSON table inspection.
//!
//! Converts a heterogeneous JSON document (object keyed by id, or array of
//! objects) into a uniform record set with stable identities and a
//! deterministic column order, serves non-destructive views over it, applies
//! in-place field edits, and serializes the result back into a document
//! structurally indistinguishable in shape from the input.

pub mod codec;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use codec::{
    detect_shape, normalize, normalize_with_shape, serialize, NormalizeError, NormalizeResult,
    ARRAY_KEY_FIELD,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{display_string, Record, RecordId, Shape, ID_KEY_COLUMN};
pub use model::record_set::{ModelError, ModelResult, RecordSet};
pub use service::table_service::{SessionError, SessionResult, TableSession};
pub use store::{load_document, save_document, LoadError, LoadResult, SaveError, SaveResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
