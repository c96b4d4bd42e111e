//! Recipe domain model.
//!
//! # Responsibility
//! - Define the recipe/ingredient shape shared with the recipe catalog.
//! - Provide the serving-ratio used when a recipe is planned.
//!
//! # Invariants
//! - Ingredient identity is case/whitespace-insensitive on `name` and `unit`.
//! - `base_servings` should be >= 1; non-positive values scale as 1.

use serde::{Deserialize, Serialize};

/// Stable identifier of a recipe inside the catalog.
pub type RecipeId = String;

/// Stable identifier of the household owning recipes and plans.
pub type HouseholdId = String;

/// One ingredient line defined on a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Free-text ingredient name as typed by the user.
    pub name: String,
    /// Amount per `base_servings`. `0` means "to taste".
    #[serde(default)]
    pub amount: f64,
    /// Free-text unit; empty for bare counts ("2 eggs").
    #[serde(default)]
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }
}

/// Recipe owned by a household.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(default)]
    pub household_id: HouseholdId,
    pub title: String,
    /// Ordered ingredient list as authored.
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Number of servings the ingredient amounts are written for.
    #[serde(default = "default_base_servings")]
    pub base_servings: f64,
}

fn default_base_servings() -> f64 {
    1.0
}

impl Recipe {
    /// Creates an empty recipe for `base_servings` servings.
    pub fn new(id: impl Into<RecipeId>, title: impl Into<String>, base_servings: f64) -> Self {
        Self {
            id: id.into(),
            household_id: HouseholdId::new(),
            title: title.into(),
            ingredients: Vec::new(),
            base_servings,
        }
    }

    /// Builder-style helper used by fixtures and import paths.
    pub fn with_ingredient(
        mut self,
        name: impl Into<String>,
        amount: f64,
        unit: impl Into<String>,
    ) -> Self {
        self.ingredients.push(Ingredient::new(name, amount, unit));
        self
    }

    /// Returns the factor applied to every ingredient when planned for
    /// `planned_servings`.
    ///
    /// Non-positive or non-finite `base_servings` counts as 1 so a broken
    /// catalog row never divides by zero.
    pub fn scaling_for(&self, planned_servings: f64) -> f64 {
        let base = if self.base_servings.is_finite() && self.base_servings > 0.0 {
            self.base_servings
        } else {
            1.0
        };
        planned_servings / base
    }
}

#[cfg(test)]
mod tests {
    use super::Recipe;

    #[test]
    fn scaling_divides_planned_by_base_servings() {
        let recipe = Recipe::new("r1", "Nasi", 2.0);
        assert_eq!(recipe.scaling_for(4.0), 2.0);
    }

    #[test]
    fn scaling_treats_non_positive_base_as_one() {
        let recipe = Recipe::new("r1", "Nasi", 0.0);
        assert_eq!(recipe.scaling_for(3.0), 3.0);

        let recipe = Recipe::new("r2", "Soep", f64::NAN);
        assert_eq!(recipe.scaling_for(2.0), 2.0);
    }

    #[test]
    fn recipe_deserializes_camel_case_with_defaults() {
        let recipe: Recipe = serde_json::from_value(serde_json::json!({
            "id": "r1",
            "title": "Stamppot",
            "baseServings": 4,
            "ingredients": [{ "name": "Aardappel", "amount": 1, "unit": "kg" }, { "name": "Zout" }]
        }))
        .unwrap();

        assert_eq!(recipe.base_servings, 4.0);
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[1].amount, 0.0);
        assert_eq!(recipe.ingredients[1].unit, "");
    }
}
