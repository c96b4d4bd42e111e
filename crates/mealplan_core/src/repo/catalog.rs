//! Read-only recipe catalog and meal-plan provider contracts.
//!
//! # Responsibility
//! - Describe how the core reads recipes and planned meals for a household.
//! - Provide `HouseholdSnapshot`, an in-memory provider decoded from JSON.
//!
//! # Invariants
//! - The core never writes through these contracts.
//! - Providers return household-scoped data; the core does not re-filter.

use crate::model::meal_plan::MealPlanEntry;
use crate::model::recipe::Recipe;
use serde::{Deserialize, Serialize};

/// Source of the household's current recipes.
pub trait RecipeCatalog {
    fn recipes(&self, household_id: &str) -> Vec<Recipe>;
}

/// Source of the household's current meal-plan entries.
pub trait MealPlanProvider {
    fn entries(&self, household_id: &str) -> Vec<MealPlanEntry>;
}

/// Point-in-time copy of one household's recipes and plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdSnapshot {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub meal_plan: Vec<MealPlanEntry>,
}

impl HouseholdSnapshot {
    /// Decodes the host JSON shape `{ "recipes": [...], "mealPlan": [...] }`.
    pub fn from_json_str(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|err| format!("invalid household snapshot: {err}"))
    }
}

impl RecipeCatalog for HouseholdSnapshot {
    fn recipes(&self, _household_id: &str) -> Vec<Recipe> {
        self.recipes.clone()
    }
}

impl MealPlanProvider for HouseholdSnapshot {
    fn entries(&self, _household_id: &str) -> Vec<MealPlanEntry> {
        self.meal_plan.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{HouseholdSnapshot, MealPlanProvider, RecipeCatalog};

    #[test]
    fn snapshot_decodes_host_shape() {
        let snapshot = HouseholdSnapshot::from_json_str(
            r#"{
                "recipes": [{ "id": "r1", "title": "Soep", "baseServings": 2, "ingredients": [] }],
                "mealPlan": [{ "date": "2025-03-10", "mealType": "dinner", "recipeId": "r1", "servings": 4 }]
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.recipes("h1").len(), 1);
        assert_eq!(snapshot.entries("h1")[0].servings, 4.0);
    }

    #[test]
    fn snapshot_rejects_malformed_json() {
        let err = HouseholdSnapshot::from_json_str("{").unwrap_err();
        assert!(err.contains("invalid household snapshot"));
    }
}
