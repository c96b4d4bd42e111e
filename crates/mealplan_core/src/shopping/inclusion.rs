//! Inclusion-state reducer.
//!
//! # Responsibility
//! - Hold which meals/ingredients are excluded from the next export.
//! - Apply toggles as a pure `(state, action) -> state` reducer.
//! - Decode persisted state shapes, including partial legacy records.
//!
//! # Invariants
//! - An ingredient is excluded iff its id is in `excluded_ingredient_ids` or
//!   its meal id is in `excluded_meal_ids`.
//! - After every action, a meal whose ingredients are all individually
//!   excluded carries the meal flag, and a meal flag implies every ingredient
//!   of that meal is individually excluded.

use crate::shopping::aggregate::{MealGroup, MealGroupId, MealIngredient, MealIngredientId};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

const FIELD_EXCLUDED_MEALS: &str = "excludedMealIds";
const FIELD_EXCLUDED_INGREDIENTS: &str = "excludedIngredientIds";

/// Excluded meal/ingredient ids for one household week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InclusionState {
    pub excluded_meal_ids: BTreeSet<MealGroupId>,
    pub excluded_ingredient_ids: BTreeSet<MealIngredientId>,
}

impl InclusionState {
    pub fn is_empty(&self) -> bool {
        self.excluded_meal_ids.is_empty() && self.excluded_ingredient_ids.is_empty()
    }

    /// Meal flag OR ingredient flag.
    pub fn is_excluded(&self, group: &MealGroup, ingredient: &MealIngredient) -> bool {
        self.excluded_meal_ids.contains(&group.id)
            || self.excluded_ingredient_ids.contains(&ingredient.id)
    }

    /// Meal flag set, or a non-empty meal with every ingredient excluded.
    pub fn is_meal_fully_excluded(&self, group: &MealGroup) -> bool {
        self.excluded_meal_ids.contains(&group.id) || self.all_ingredients_flagged(group)
    }

    /// Serialized record written to the key-value store.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            FIELD_EXCLUDED_MEALS: self.excluded_meal_ids,
            FIELD_EXCLUDED_INGREDIENTS: self.excluded_ingredient_ids,
        })
    }

    fn all_ingredients_flagged(&self, group: &MealGroup) -> bool {
        !group.ingredients.is_empty()
            && group
                .ingredient_ids()
                .all(|id| self.excluded_ingredient_ids.contains(id))
    }

    fn exclude_group(&mut self, group: &MealGroup) {
        self.excluded_meal_ids.insert(group.id.clone());
        self.excluded_ingredient_ids
            .extend(group.ingredient_ids().map(str::to_string));
    }

    fn include_group(&mut self, group: &MealGroup) {
        self.excluded_meal_ids.remove(&group.id);
        for id in group.ingredient_ids() {
            self.excluded_ingredient_ids.remove(id);
        }
    }

    fn rederive_meal_flag(&mut self, group: &MealGroup) {
        if self.all_ingredients_flagged(group) {
            self.excluded_meal_ids.insert(group.id.clone());
        } else if !group.ingredients.is_empty() {
            self.excluded_meal_ids.remove(&group.id);
        }
    }
}

/// Mutations accepted by [`reduce`].
#[derive(Debug, Clone, Copy)]
pub enum InclusionAction<'a> {
    /// Full toggle of one meal and all of its ingredients.
    ToggleMeal(&'a MealGroup),
    /// Flip one ingredient, then re-derive its meal flag.
    ToggleIngredient {
        group: &'a MealGroup,
        ingredient_id: &'a str,
    },
    /// Exclude meals and all their ingredients, e.g. after an export.
    MarkGroupsExcluded(&'a [MealGroup]),
    /// Clear both sets.
    Reset,
}

/// Applies one action and returns the next state.
pub fn reduce(state: &InclusionState, action: InclusionAction<'_>) -> InclusionState {
    let mut next = state.clone();
    match action {
        InclusionAction::ToggleMeal(group) => {
            if state.is_meal_fully_excluded(group) {
                next.include_group(group);
            } else {
                next.exclude_group(group);
            }
        }
        InclusionAction::ToggleIngredient {
            group,
            ingredient_id,
        } => {
            let Some(ingredient) = group.ingredient(ingredient_id) else {
                return next;
            };
            if state.is_excluded(group, ingredient) {
                if state.excluded_meal_ids.contains(&group.id) {
                    // Meal flag alone excluded the siblings; keep them excluded.
                    next.excluded_ingredient_ids
                        .extend(group.ingredient_ids().map(str::to_string));
                }
                next.excluded_ingredient_ids.remove(&ingredient.id);
            } else {
                next.excluded_ingredient_ids.insert(ingredient.id.clone());
            }
            next.rederive_meal_flag(group);
        }
        InclusionAction::MarkGroupsExcluded(groups) => {
            for group in groups {
                next.exclude_group(group);
            }
        }
        InclusionAction::Reset => next = InclusionState::default(),
    }
    next
}

/// Re-derives meal flags from ingredient flags for the given groups.
///
/// A meal flag stored without any of its ingredient flags is a meal-only
/// legacy record and is expanded onto the ingredients first.
pub fn reconcile(state: &InclusionState, groups: &[MealGroup]) -> InclusionState {
    let mut next = state.clone();
    for group in groups {
        if group.ingredients.is_empty() {
            continue;
        }
        let meal_flagged = next.excluded_meal_ids.contains(&group.id);
        let any_ingredient_flagged = group
            .ingredient_ids()
            .any(|id| next.excluded_ingredient_ids.contains(id));
        if meal_flagged && !any_ingredient_flagged {
            next.exclude_group(group);
        }
        next.rederive_meal_flag(group);
    }
    next
}

/// Result of decoding a persisted inclusion record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InclusionDecode {
    /// Record was an object; missing or wrong-typed fields decoded as empty.
    Decoded(InclusionState),
    /// Record was absent or unusable; callers start from empty state.
    Fallback(&'static str),
}

impl InclusionDecode {
    pub fn into_state(self) -> InclusionState {
        match self {
            Self::Decoded(state) => state,
            Self::Fallback(_) => InclusionState::default(),
        }
    }
}

/// Decodes a persisted record, tolerating partial and legacy shapes.
pub fn decode_inclusion_state(value: Option<&Value>) -> InclusionDecode {
    match value {
        None | Some(Value::Null) => InclusionDecode::Fallback("missing"),
        Some(Value::Object(map)) => InclusionDecode::Decoded(InclusionState {
            excluded_meal_ids: read_id_set(map, FIELD_EXCLUDED_MEALS),
            excluded_ingredient_ids: read_id_set(map, FIELD_EXCLUDED_INGREDIENTS),
        }),
        Some(_) => InclusionDecode::Fallback("not_an_object"),
    }
}

fn read_id_set(map: &Map<String, Value>, field: &str) -> BTreeSet<String> {
    match map.get(field) {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => BTreeSet::new(),
    }
}
