//! Meal-plan domain model.
//!
//! # Responsibility
//! - Define one scheduled meal (`MealPlanEntry`) and the closed meal-type set.
//!
//! # Invariants
//! - `date` carries no time component.
//! - Slot key is `(date, meal_type)`; multiple entries per slot are tolerated
//!   by consumers even though the planner UI only creates one.

use crate::model::recipe::RecipeId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Meal slot within one day.
///
/// Declaration order is the display order: lunch < dinner < other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Lunch,
    Dinner,
    /// Any slot outside lunch/dinner. Unknown stored values decode here.
    #[serde(other)]
    Other,
}

impl MealType {
    /// Stable string id used in group identities and storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Other => "other",
        }
    }

    /// Parses a stored meal type; unknown values map to `Other`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            _ => Self::Other,
        }
    }
}

/// One scheduled meal in the household calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEntry {
    #[serde(default)]
    pub id: String,
    pub date: NaiveDate,
    pub meal_type: MealType,
    /// May dangle when the recipe was deleted after planning.
    pub recipe_id: RecipeId,
    /// Planned servings for this meal.
    #[serde(default = "default_servings")]
    pub servings: f64,
}

fn default_servings() -> f64 {
    1.0
}

impl MealPlanEntry {
    pub fn new(
        date: NaiveDate,
        meal_type: MealType,
        recipe_id: impl Into<RecipeId>,
        servings: f64,
    ) -> Self {
        Self {
            id: String::new(),
            date,
            meal_type,
            recipe_id: recipe_id.into(),
            servings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MealPlanEntry, MealType};

    #[test]
    fn meal_type_order_is_lunch_dinner_other() {
        let mut kinds = vec![MealType::Other, MealType::Dinner, MealType::Lunch];
        kinds.sort();
        assert_eq!(kinds, vec![MealType::Lunch, MealType::Dinner, MealType::Other]);
    }

    #[test]
    fn unknown_meal_type_decodes_as_other() {
        let entry: MealPlanEntry = serde_json::from_value(serde_json::json!({
            "date": "2025-03-10",
            "mealType": "breakfast",
            "recipeId": "r1",
            "servings": 2
        }))
        .unwrap();
        assert_eq!(entry.meal_type, MealType::Other);
        assert_eq!(MealType::parse(" Dinner "), MealType::Dinner);
    }
}
