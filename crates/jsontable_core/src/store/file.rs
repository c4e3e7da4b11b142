//! File-backed load and save.
//!
//! # Responsibility
//! - Read a UTF-8 JSON document from disk and normalize it.
//! - Serialize a record set and write it back pretty-printed.
//! - Emit `document_load` / `document_save` logging events with durations.
//!
//! # Invariants
//! - Load is all-or-nothing: any failure leaves no partial result.
//! - Output formatting matches the original convention: 2-space indent,
//!   non-ASCII characters unescaped.

use super::{LoadResult, SaveResult};
use crate::codec::{normalize, serialize};
use crate::model::record_set::RecordSet;
use log::{error, info};
use serde_json::Value;
use std::path::Path;
use std::time::Instant;

/// Loads and normalizes a JSON document from a file path.
///
/// # Errors
/// - I/O failures reading the file.
/// - Parse failures for invalid JSON.
/// - Normalization rejection for incompatible input.
pub fn load_document(path: impl AsRef<Path>) -> LoadResult<RecordSet> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=document_load module=store status=start");

    let set = match read_and_normalize(path) {
        Ok(set) => set,
        Err(err) => {
            error!(
                "event=document_load module=store status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err);
        }
    };

    info!(
        "event=document_load module=store status=ok duration_ms={} shape={} records={} columns={}",
        started_at.elapsed().as_millis(),
        set.shape().as_str(),
        set.len(),
        set.columns().len()
    );
    Ok(set)
}

/// Serializes a record set and writes it to a file path.
///
/// # Errors
/// - Rendering failures (not expected for structurally valid sets).
/// - I/O failures writing the file.
pub fn save_document(path: impl AsRef<Path>, set: &RecordSet) -> SaveResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=document_save module=store status=start shape={} records={}",
        set.shape().as_str(),
        set.len()
    );

    let document = serialize(set);
    // to_string_pretty indents with two spaces and leaves non-ASCII
    // characters unescaped.
    let text = match serde_json::to_string_pretty(&document) {
        Ok(text) => text,
        Err(err) => {
            error!(
                "event=document_save module=store status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    if let Err(err) = std::fs::write(path, text) {
        error!(
            "event=document_save module=store status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        );
        return Err(err.into());
    }

    info!(
        "event=document_save module=store status=ok duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(())
}

fn read_and_normalize(path: &Path) -> LoadResult<RecordSet> {
    let text = std::fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&text)?;
    Ok(normalize(&document)?)
}
