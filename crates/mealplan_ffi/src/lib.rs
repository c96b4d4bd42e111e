//! Flutter-facing FFI crate for the meal planner core.

pub mod api;
