//! Core domain logic for the household meal planner.
//! Turns a planned week into a consolidated, human-readable shopping list and
//! owns the per-week export selection.

pub mod config;
pub mod db;
pub mod locale;
pub mod logging;
pub mod model;
pub mod quantity;
pub mod repo;
pub mod service;
pub mod shopping;

pub use config::{CoreConfig, ShareMode};
pub use locale::Locale;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::meal_plan::{MealPlanEntry, MealType};
pub use model::recipe::{HouseholdId, Ingredient, Recipe, RecipeId};
pub use model::week::{DateInterval, WeekRange};
pub use quantity::human::{to_human_quantity, to_human_quantity_with_locale, HumanQuantity};
pub use quantity::unit::{classify_unit, UnitCategory};
pub use repo::catalog::{HouseholdSnapshot, MealPlanProvider, RecipeCatalog};
pub use repo::kv_store::{
    InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};
pub use service::inclusion_service::{InclusionError, InclusionService, LoadTicket, WeekKey};
pub use service::shopping_service::{ExportError, ShoppingService};
pub use shopping::aggregate::{
    build_meal_groups, ingredient_key, MealGroup, MealGroupId, MealIngredient, MealIngredientId,
};
pub use shopping::inclusion::{
    decode_inclusion_state, reconcile, reduce, InclusionAction, InclusionDecode, InclusionState,
};
pub use shopping::list::{flatten_meal_groups, render_shopping_list_text, ShoppingListItem};
pub use shopping::snapshot::{
    build_snapshot_payload, snapshot_title, EmptySnapshotError, NoShare, PublishedShare,
    ShareCollaborator, ShareError, ShareSnapshot, SnapshotItem, SnapshotPayload,
};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
