//! Household meal-planning domain model.
//!
//! # Responsibility
//! - Define the recipe and meal-plan records read from external providers.
//! - Define calendar helpers for the Monday-start planning week.
//!
//! # Invariants
//! - Records here are read-only inputs; derived shopping projections live in
//!   `crate::shopping` and are never persisted.
//! - A meal-plan entry may reference a recipe that no longer exists.

pub mod meal_plan;
pub mod recipe;
pub mod week;
