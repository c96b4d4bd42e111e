//! Ingredient aggregator.
//!
//! # Responsibility
//! - Filter meal-plan entries to a date interval and resolve their recipes.
//! - Scale ingredient amounts by the serving ratio.
//! - Merge duplicate ingredients inside one meal and order the result.
//!
//! # Invariants
//! - Dangling recipe references are skipped, never reported as errors.
//! - Output order is fully determined by the input: date, meal type, recipe
//!   title, recipe id; ingredients by name, then key.

use crate::locale::Locale;
use crate::model::meal_plan::{MealPlanEntry, MealType};
use crate::model::recipe::{Recipe, RecipeId};
use crate::model::week::DateInterval;
use chrono::NaiveDate;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// Identity of one meal group: `date::mealType::recipeId`.
pub type MealGroupId = String;

/// Identity of one ingredient line inside a meal group.
pub type MealIngredientId = String;

const KEY_SEPARATOR: &str = "::";

/// Ingredient line inside a meal after intra-meal merging.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealIngredient {
    /// `{meal_group_id}::{key}`.
    pub id: MealIngredientId,
    /// Normalized ingredient key, see [`ingredient_key`].
    pub key: String,
    /// Display name from the first contributing recipe line.
    pub name: String,
    /// Display unit from the first contributing recipe line, trimmed.
    pub unit: String,
    /// Sum of scaled contributions.
    pub amount: f64,
}

/// One recipe planned in one meal slot on one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealGroup {
    pub id: MealGroupId,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub recipe_id: RecipeId,
    pub recipe_title: String,
    /// Planned servings summed over entries sharing this group.
    pub servings: f64,
    pub ingredients: Vec<MealIngredient>,
}

impl MealGroup {
    pub fn ingredient(&self, ingredient_id: &str) -> Option<&MealIngredient> {
        self.ingredients
            .iter()
            .find(|ingredient| ingredient.id == ingredient_id)
    }

    pub fn ingredient_ids(&self) -> impl Iterator<Item = &str> {
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.id.as_str())
    }
}

/// Normalized ingredient identity: `lower(trim(name))::lower(trim(unit))`.
pub fn ingredient_key(name: &str, unit: &str) -> String {
    format!(
        "{}{KEY_SEPARATOR}{}",
        name.trim().to_lowercase(),
        unit.trim().to_lowercase()
    )
}

/// Meal group identity: `yyyy-MM-dd::mealType::recipeId`.
pub fn meal_group_id(date: NaiveDate, meal_type: MealType, recipe_id: &str) -> MealGroupId {
    format!(
        "{}{KEY_SEPARATOR}{}{KEY_SEPARATOR}{recipe_id}",
        date.format("%Y-%m-%d"),
        meal_type.as_str()
    )
}

/// Ingredient identity inside one meal group.
pub fn meal_ingredient_id(group_id: &str, key: &str) -> MealIngredientId {
    format!("{group_id}{KEY_SEPARATOR}{key}")
}

/// Builds ordered meal groups for all entries within `interval`.
///
/// Every call recomputes the full projection; equal inputs give equal
/// output, including order.
pub fn build_meal_groups(
    meal_plan: &[MealPlanEntry],
    recipes: &[Recipe],
    interval: DateInterval,
    locale: Locale,
) -> Vec<MealGroup> {
    let mut recipes_by_id: HashMap<&str, &Recipe> = HashMap::with_capacity(recipes.len());
    for recipe in recipes {
        recipes_by_id.entry(recipe.id.as_str()).or_insert(recipe);
    }

    let mut groups: Vec<GroupAccumulator> = Vec::new();
    let mut group_index: HashMap<MealGroupId, usize> = HashMap::new();
    let mut skipped = 0usize;

    for entry in meal_plan {
        if !interval.contains(entry.date) {
            continue;
        }
        let Some(recipe) = recipes_by_id.get(entry.recipe_id.as_str()) else {
            skipped += 1;
            continue;
        };

        let servings = planned_servings(entry.servings);
        let scaling = recipe.scaling_for(servings);
        let group_id = meal_group_id(entry.date, entry.meal_type, &recipe.id);
        let index = *group_index.entry(group_id.clone()).or_insert_with(|| {
            groups.push(GroupAccumulator::new(group_id, entry, recipe));
            groups.len() - 1
        });

        let group = &mut groups[index];
        group.servings += servings;
        for ingredient in &recipe.ingredients {
            group.add(
                &ingredient.name,
                &ingredient.unit,
                effective_amount(ingredient.amount) * scaling,
            );
        }
    }

    if skipped > 0 {
        debug!(
            "event=meal_groups_build module=shopping status=skip reason=recipe_missing count={}",
            skipped
        );
    }

    let mut groups: Vec<MealGroup> = groups
        .into_iter()
        .map(|group| group.finish(locale))
        .collect();
    groups.sort_by(|left, right| {
        left.date
            .cmp(&right.date)
            .then_with(|| left.meal_type.cmp(&right.meal_type))
            .then_with(|| locale.compare_names(&left.recipe_title, &right.recipe_title))
            .then_with(|| left.recipe_id.cmp(&right.recipe_id))
    });
    groups
}

/// "To taste" and broken amounts still need one unit on the list.
fn effective_amount(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        1.0
    }
}

fn planned_servings(servings: f64) -> f64 {
    if servings.is_finite() && servings > 0.0 {
        servings
    } else {
        1.0
    }
}

struct GroupAccumulator {
    id: MealGroupId,
    date: NaiveDate,
    meal_type: MealType,
    recipe_id: RecipeId,
    recipe_title: String,
    servings: f64,
    ingredients: Vec<MealIngredient>,
    ingredient_index: HashMap<String, usize>,
}

impl GroupAccumulator {
    fn new(id: MealGroupId, entry: &MealPlanEntry, recipe: &Recipe) -> Self {
        Self {
            id,
            date: entry.date,
            meal_type: entry.meal_type,
            recipe_id: recipe.id.clone(),
            recipe_title: recipe.title.clone(),
            servings: 0.0,
            ingredients: Vec::new(),
            ingredient_index: HashMap::new(),
        }
    }

    fn add(&mut self, name: &str, unit: &str, amount: f64) {
        let key = ingredient_key(name, unit);
        if let Some(&index) = self.ingredient_index.get(&key) {
            self.ingredients[index].amount += amount;
            return;
        }

        self.ingredient_index
            .insert(key.clone(), self.ingredients.len());
        self.ingredients.push(MealIngredient {
            id: meal_ingredient_id(&self.id, &key),
            key,
            name: name.trim().to_string(),
            unit: unit.trim().to_string(),
            amount,
        });
    }

    fn finish(self, locale: Locale) -> MealGroup {
        let mut ingredients = self.ingredients;
        ingredients.sort_by(|left, right| {
            locale
                .compare_names(&left.name, &right.name)
                .then_with(|| left.key.cmp(&right.key))
        });
        MealGroup {
            id: self.id,
            date: self.date,
            meal_type: self.meal_type,
            recipe_id: self.recipe_id,
            recipe_title: self.recipe_title,
            servings: self.servings,
            ingredients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ingredient_key, meal_group_id, meal_ingredient_id};
    use crate::model::meal_plan::MealType;
    use chrono::NaiveDate;

    #[test]
    fn keys_are_case_and_whitespace_insensitive() {
        assert_eq!(ingredient_key(" Ui ", "Stuk"), ingredient_key("ui", " stuk"));
        assert_eq!(ingredient_key("Rijst", ""), "rijst::");
    }

    #[test]
    fn group_and_ingredient_ids_are_stable() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let group_id = meal_group_id(date, MealType::Dinner, "r1");
        assert_eq!(group_id, "2025-03-12::dinner::r1");
        assert_eq!(
            meal_ingredient_id(&group_id, "rijst::g"),
            "2025-03-12::dinner::r1::rijst::g"
        );
    }
}
