//! Use-case services for table inspection.
//!
//! # Responsibility
//! - Orchestrate codec, view and store calls into the session-level API
//!   consumed by UI/CLI layers.
//! - Keep those layers decoupled from model and format details.

pub mod table_service;
