//! Shopping-list aggregation, inclusion state and export snapshots.
//!
//! # Responsibility
//! - Project a week of planned meals onto per-meal ingredient groups.
//! - Track which meals/ingredients are excluded from the next export.
//! - Shape the export payload handed to the share collaborator.
//!
//! # Invariants
//! - Group/ingredient projections are recomputed on every call and own no
//!   state.
//! - Inclusion state transitions only happen through `inclusion::reduce`.

pub mod aggregate;
pub mod inclusion;
pub mod list;
pub mod snapshot;
