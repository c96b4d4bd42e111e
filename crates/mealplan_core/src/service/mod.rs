//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate pure shopping projections with persistence and sharing.
//! - Keep FFI/CLI layers decoupled from storage and collaborator details.

pub mod inclusion_service;
pub mod shopping_service;
