//! Canonical data model for JSON table inspection.
//!
//! # Responsibility
//! - Define the record / record-set structures shared by every layer.
//! - Keep identity handling explicit: a dedicated slot on the record, never
//!   an overloaded field name.
//!
//! # Invariants
//! - Identities are dense, zero-based and stable for the record set's
//!   lifetime.
//! - Views derive from the canonical records; edits land on them directly.

pub mod record;
pub mod record_set;
