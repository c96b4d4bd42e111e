//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `mealplan_core` linkage.
//! - Optionally print a week's shopping list from a household JSON fixture:
//!   `mealplan_cli <household.json> <household-id> <yyyy-MM-dd>`.
//! - Keep output deterministic for quick local sanity checks.

use chrono::NaiveDate;
use mealplan_core::{
    render_shopping_list_text, snapshot_title, CoreConfig, HouseholdSnapshot,
    InMemoryKeyValueStore, ShoppingService, WeekKey, WeekRange,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("mealplan_core ping={}", mealplan_core::ping());
    println!("mealplan_core version={}", mealplan_core::core_version());

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return ExitCode::SUCCESS;
    }
    match print_week(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_week(args: &[String]) -> Result<(), String> {
    let [fixture_path, household_id, week_date] = args else {
        return Err("usage: mealplan_cli <household.json> <household-id> <yyyy-MM-dd>".into());
    };

    let raw = std::fs::read_to_string(fixture_path)
        .map_err(|err| format!("failed to read `{fixture_path}`: {err}"))?;
    let household = HouseholdSnapshot::from_json_str(&raw)?;
    let date = NaiveDate::parse_from_str(week_date, "%Y-%m-%d")
        .map_err(|err| format!("invalid date `{week_date}`: {err}"))?;
    let key = WeekKey::new(household_id.as_str(), WeekRange::containing(date));

    let mut service =
        ShoppingService::local_only(CoreConfig::default(), InMemoryKeyValueStore::new());
    service.open_week(key.clone()).map_err(|err| err.to_string())?;
    let groups = service.meal_groups(&household, &key);
    let items = service.included_items(&groups);

    println!("{}", snapshot_title(key.week));
    println!("{}", render_shopping_list_text(&items));
    Ok(())
}
