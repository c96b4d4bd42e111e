//! Flat shopping list projection.
//!
//! # Responsibility
//! - Merge ingredient lines across meals by normalized key.
//! - Attach rounded display quantities and render a plain-text list.
//!
//! # Invariants
//! - Items are ordered by localized name, then key.
//! - The first contributing line (in group order) provides display name/unit.

use crate::locale::Locale;
use crate::quantity::human::{to_human_quantity_with_locale, HumanQuantity};
use crate::shopping::aggregate::{MealGroup, MealGroupId, MealIngredient};
use serde::Serialize;
use std::collections::HashMap;

/// One line of the consolidated shopping list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub key: String,
    pub name: String,
    pub unit: String,
    /// Unrounded sum across meals.
    pub amount: f64,
    pub quantity: HumanQuantity,
    /// Meals contributing to this line, in group order.
    pub meal_ids: Vec<MealGroupId>,
}

/// Flattens meal groups into one list, keeping lines accepted by `include`.
pub fn flatten_meal_groups<F>(
    groups: &[MealGroup],
    include: F,
    locale: Locale,
) -> Vec<ShoppingListItem>
where
    F: Fn(&MealGroup, &MealIngredient) -> bool,
{
    let mut lines: Vec<LineAccumulator<'_>> = Vec::new();
    let mut index_by_key: HashMap<&str, usize> = HashMap::new();

    for group in groups {
        for ingredient in &group.ingredients {
            if !include(group, ingredient) {
                continue;
            }
            match index_by_key.get(ingredient.key.as_str()) {
                Some(&index) => {
                    let line = &mut lines[index];
                    line.amount += ingredient.amount;
                    if !line.meal_ids.contains(&group.id) {
                        line.meal_ids.push(group.id.clone());
                    }
                }
                None => {
                    index_by_key.insert(ingredient.key.as_str(), lines.len());
                    lines.push(LineAccumulator {
                        first: ingredient,
                        amount: ingredient.amount,
                        meal_ids: vec![group.id.clone()],
                    });
                }
            }
        }
    }

    let mut items: Vec<ShoppingListItem> = lines
        .into_iter()
        .map(|line| ShoppingListItem {
            key: line.first.key.clone(),
            name: line.first.name.clone(),
            unit: line.first.unit.clone(),
            amount: line.amount,
            quantity: to_human_quantity_with_locale(line.amount, &line.first.unit, locale),
            meal_ids: line.meal_ids,
        })
        .collect();
    items.sort_by(|left, right| {
        locale
            .compare_names(&left.name, &right.name)
            .then_with(|| left.key.cmp(&right.key))
    });
    items
}

struct LineAccumulator<'a> {
    first: &'a MealIngredient,
    amount: f64,
    meal_ids: Vec<MealGroupId>,
}

/// Renders one `"<quantity> <name>"` line per item, for clipboard sharing.
pub fn render_shopping_list_text(items: &[ShoppingListItem]) -> String {
    items
        .iter()
        .map(|item| format!("- {} {}", item.quantity.display_with_unit, item.name))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{flatten_meal_groups, render_shopping_list_text};
    use crate::locale::Locale;
    use crate::model::meal_plan::MealType;
    use crate::shopping::aggregate::{
        ingredient_key, meal_group_id, meal_ingredient_id, MealGroup, MealIngredient,
    };
    use chrono::NaiveDate;

    fn group(day: u32, lines: &[(&str, f64, &str)]) -> MealGroup {
        let date = NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
        let id = meal_group_id(date, MealType::Dinner, "r1");
        MealGroup {
            id: id.clone(),
            date,
            meal_type: MealType::Dinner,
            recipe_id: "r1".to_string(),
            recipe_title: "Curry".to_string(),
            servings: 2.0,
            ingredients: lines
                .iter()
                .map(|(name, amount, unit)| {
                    let key = ingredient_key(name, unit);
                    MealIngredient {
                        id: meal_ingredient_id(&id, &key),
                        key,
                        name: name.to_string(),
                        unit: unit.to_string(),
                        amount: *amount,
                    }
                })
                .collect(),
        }
    }

    #[test]
    fn flatten_merges_across_meals_and_rounds() {
        let groups = vec![
            group(10, &[("Rijst", 150.0, "g"), ("Ui", 1.0, "stuk")]),
            group(11, &[("rijst", 151.0, "G"), ("Kokosmelk", 400.0, "ml")]),
        ];

        let items = flatten_meal_groups(&groups, |_, _| true, Locale::Dutch);

        let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Kokosmelk", "Rijst", "Ui"]);
        let rice = &items[1];
        assert_eq!(rice.amount, 301.0);
        assert_eq!(rice.quantity.rounded_amount, 300.0);
        assert_eq!(rice.meal_ids.len(), 2);
    }

    #[test]
    fn flatten_respects_filter_and_renders_text() {
        let groups = vec![group(10, &[("Rijst", 200.0, "g"), ("Zout", 1.0, "snufje")])];

        let items = flatten_meal_groups(
            &groups,
            |_, ingredient| ingredient.name != "Zout",
            Locale::Dutch,
        );

        assert_eq!(items.len(), 1);
        assert_eq!(render_shopping_list_text(&items), "- 200 g Rijst");
    }
}
