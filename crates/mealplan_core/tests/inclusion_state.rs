use chrono::NaiveDate;
use mealplan_core::{
    build_meal_groups, reconcile, reduce, InclusionAction, InclusionState, Locale, MealGroup,
    MealPlanEntry, MealType, Recipe, WeekRange,
};

fn groups() -> Vec<MealGroup> {
    let date = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
    let recipes = vec![
        Recipe::new("R1", "Chili", 2.0)
            .with_ingredient("Bonen", 1.0, "blik")
            .with_ingredient("Gehakt", 300.0, "g")
            .with_ingredient("Ui", 1.0, "stuk"),
        Recipe::new("R2", "Tosti", 1.0)
            .with_ingredient("Brood", 2.0, "")
            .with_ingredient("Kaas", 50.0, "g"),
    ];
    let plan = vec![
        MealPlanEntry::new(date, MealType::Dinner, "R1", 2.0),
        MealPlanEntry::new(date, MealType::Lunch, "R2", 1.0),
    ];
    build_meal_groups(
        &plan,
        &recipes,
        WeekRange::containing(date).interval(),
        Locale::Dutch,
    )
}

fn chili(groups: &[MealGroup]) -> &MealGroup {
    groups.iter().find(|g| g.recipe_id == "R1").unwrap()
}

fn tosti(groups: &[MealGroup]) -> &MealGroup {
    groups.iter().find(|g| g.recipe_id == "R2").unwrap()
}

fn ingredient_ids(group: &MealGroup) -> Vec<String> {
    group.ingredient_ids().map(str::to_string).collect()
}

#[test]
fn excluding_every_ingredient_sets_meal_flag_and_meal_toggle_clears_all() {
    let groups = groups();
    let meal = chili(&groups);
    assert_eq!(meal.ingredients.len(), 3);

    let mut state = InclusionState::default();
    for id in ingredient_ids(meal) {
        assert!(!state.excluded_meal_ids.contains(&meal.id));
        state = reduce(
            &state,
            InclusionAction::ToggleIngredient {
                group: meal,
                ingredient_id: &id,
            },
        );
    }
    assert!(state.excluded_meal_ids.contains(&meal.id));

    state = reduce(&state, InclusionAction::ToggleMeal(meal));

    for id in ingredient_ids(meal) {
        assert!(!state.excluded_ingredient_ids.contains(&id));
    }
    assert!(state.is_empty());
}

#[test]
fn toggle_meal_excludes_all_ingredients_and_round_trips() {
    let groups = groups();
    let meal = tosti(&groups);
    let empty = InclusionState::default();

    let excluded = reduce(&empty, InclusionAction::ToggleMeal(meal));

    assert!(excluded.excluded_meal_ids.contains(&meal.id));
    for ingredient in &meal.ingredients {
        assert!(excluded.excluded_ingredient_ids.contains(&ingredient.id));
        assert!(excluded.is_excluded(meal, ingredient));
    }

    let restored = reduce(&excluded, InclusionAction::ToggleMeal(meal));
    assert_eq!(restored, empty);
}

#[test]
fn partially_excluded_meal_toggle_excludes_the_rest() {
    let groups = groups();
    let meal = chili(&groups);
    let first = meal.ingredients[0].id.clone();

    let partial = reduce(
        &InclusionState::default(),
        InclusionAction::ToggleIngredient {
            group: meal,
            ingredient_id: &first,
        },
    );
    assert!(!partial.excluded_meal_ids.contains(&meal.id));

    let full = reduce(&partial, InclusionAction::ToggleMeal(meal));
    assert!(full.excluded_meal_ids.contains(&meal.id));
    assert_eq!(full.excluded_ingredient_ids.len(), 3);
}

#[test]
fn re_including_one_ingredient_clears_meal_flag_only() {
    let groups = groups();
    let meal = chili(&groups);
    let excluded = reduce(&InclusionState::default(), InclusionAction::ToggleMeal(meal));
    let target = meal.ingredients[1].clone();

    let state = reduce(
        &excluded,
        InclusionAction::ToggleIngredient {
            group: meal,
            ingredient_id: &target.id,
        },
    );

    assert!(!state.excluded_meal_ids.contains(&meal.id));
    assert!(!state.is_excluded(meal, &target));
    assert_eq!(state.excluded_ingredient_ids.len(), 2);
}

#[test]
fn meal_only_flag_keeps_siblings_excluded_when_one_is_re_included() {
    let groups = groups();
    let meal = tosti(&groups);
    let mut legacy = InclusionState::default();
    legacy.excluded_meal_ids.insert(meal.id.clone());
    let target = meal.ingredients[0].id.clone();

    let state = reduce(
        &legacy,
        InclusionAction::ToggleIngredient {
            group: meal,
            ingredient_id: &target,
        },
    );

    assert!(!state.excluded_meal_ids.contains(&meal.id));
    assert!(!state.excluded_ingredient_ids.contains(&target));
    assert!(state.is_excluded(meal, &meal.ingredients[1]));
}

#[test]
fn unknown_ingredient_id_leaves_state_unchanged() {
    let groups = groups();
    let meal = tosti(&groups);

    let state = reduce(
        &InclusionState::default(),
        InclusionAction::ToggleIngredient {
            group: meal,
            ingredient_id: "nope",
        },
    );

    assert!(state.is_empty());
}

#[test]
fn mark_groups_excluded_and_reset() {
    let groups = groups();

    let marked = reduce(
        &InclusionState::default(),
        InclusionAction::MarkGroupsExcluded(&groups),
    );
    assert_eq!(marked.excluded_meal_ids.len(), 2);
    assert_eq!(marked.excluded_ingredient_ids.len(), 5);

    let reset = reduce(&marked, InclusionAction::Reset);
    assert!(reset.is_empty());
}

#[test]
fn reconcile_rederives_meal_flags_from_ingredients() {
    let groups = groups();
    let meal = chili(&groups);
    let lunch = tosti(&groups);

    let mut state = InclusionState::default();
    // Stale meal flag next to a partially excluded meal.
    state.excluded_meal_ids.insert(meal.id.clone());
    state
        .excluded_ingredient_ids
        .insert(meal.ingredients[0].id.clone());
    // All ingredients excluded but meal flag missing.
    state
        .excluded_ingredient_ids
        .extend(ingredient_ids(lunch));

    let reconciled = reconcile(&state, &groups);

    assert!(!reconciled.excluded_meal_ids.contains(&meal.id));
    assert!(reconciled.excluded_meal_ids.contains(&lunch.id));
}

#[test]
fn reconcile_expands_meal_only_legacy_records() {
    let groups = groups();
    let meal = chili(&groups);
    let mut legacy = InclusionState::default();
    legacy.excluded_meal_ids.insert(meal.id.clone());

    let reconciled = reconcile(&legacy, &groups);

    assert!(reconciled.excluded_meal_ids.contains(&meal.id));
    for id in ingredient_ids(meal) {
        assert!(reconciled.excluded_ingredient_ids.contains(&id));
    }
}
