//! Derived, read-only views over a record set.
//!
//! # Responsibility
//! - Produce ordered identity sequences for display without mutating the
//!   canonical records.
//!
//! # Invariants
//! - View functions are pure; recomputing a view after an edit reflects the
//!   edit because views never copy record data.

pub mod engine;
