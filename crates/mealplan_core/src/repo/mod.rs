//! Persistence ports and adapters.
//!
//! # Responsibility
//! - Define the key-value port the inclusion-state service writes through.
//! - Provide an in-memory adapter (tests, local-only hosts) and a SQLite
//!   adapter (production).
//!
//! # Invariants
//! - Values are JSON documents; readers must tolerate partial shapes.
//! - A missing key reads as `None`, never as an error.

pub mod catalog;
pub mod kv_store;
