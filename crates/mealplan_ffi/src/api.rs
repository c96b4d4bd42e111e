//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose shopping-list use-cases to Dart via FRB.
//! - Keep recipe/plan data on the Dart side: callers pass the household
//!   snapshot JSON on each call; only inclusion state is stored here.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Publishing to the grocery app happens in Dart; this layer shapes the
//!   payload and records the export afterwards.

use chrono::NaiveDate;
use log::warn;
use mealplan_core::db::open_db;
use mealplan_core::{
    build_meal_groups, build_snapshot_payload, core_version as core_version_inner,
    init_logging as init_logging_inner, ping as ping_inner, render_shopping_list_text,
    to_human_quantity_with_locale, CoreConfig, HouseholdSnapshot, InclusionService, Locale,
    MealGroup, MealIngredient, MealPlanProvider, RecipeCatalog, ShareMode, SqliteKeyValueStore,
    WeekKey, WeekRange,
};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::OnceLock;

const STORE_DB_FILE_NAME: &str = "mealplan_store.sqlite3";
const STORE_DB_PATH_ENV: &str = "MEALPLAN_DB_PATH";
static STORE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static CORE_CONFIG: OnceLock<CoreConfig> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Returns empty string on success and error message on failure.
/// - Safe to call repeatedly with the same `level + log_dir`.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Sets core configuration from JSON once per process.
///
/// # FFI contract
/// - Returns empty string on success and error message on failure.
/// - Repeating the same configuration is accepted; a different one is not.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_core(config_json: String) -> String {
    let config = match CoreConfig::from_json_str(config_json.as_str()) {
        Ok(config) => config,
        Err(err) => return err,
    };
    let active = CORE_CONFIG.get_or_init(|| config.clone());
    if *active == config {
        String::new()
    } else {
        "core config already set; refusing to reconfigure".to_string()
    }
}

/// Sets the SQLite file used for inclusion state, once per process.
///
/// Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_store_path(path: String) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return "store path cannot be empty".to_string();
    }
    let requested = PathBuf::from(trimmed);
    let active = STORE_DB_PATH.get_or_init(|| requested.clone());
    if *active == requested {
        String::new()
    } else {
        format!(
            "store path already set to `{}`; refusing to switch",
            active.display()
        )
    }
}

/// Rounded quantity for one amount/unit pair.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityView {
    pub rounded_amount: f64,
    /// `unit category`: `weight|volume|count|other`.
    pub category: String,
    pub is_approximate: bool,
    pub display_amount: String,
    pub display_with_unit: String,
}

/// Formats one amount with the configured locale.
#[flutter_rust_bridge::frb(sync)]
pub fn human_quantity(amount: f64, unit: String) -> QuantityView {
    let quantity = to_human_quantity_with_locale(amount, unit.as_str(), active_locale());
    QuantityView {
        rounded_amount: quantity.rounded_amount,
        category: category_label(quantity.category).to_string(),
        is_approximate: quantity.is_approximate,
        display_amount: quantity.display_prefixed,
        display_with_unit: quantity.display_with_unit,
    }
}

/// One ingredient line of a planned meal.
#[derive(Debug, Clone, PartialEq)]
pub struct MealIngredientView {
    pub id: String,
    pub name: String,
    pub display_with_unit: String,
    pub excluded: bool,
}

/// One planned meal with its ingredient lines.
#[derive(Debug, Clone, PartialEq)]
pub struct MealGroupView {
    pub id: String,
    /// `yyyy-MM-dd`.
    pub date: String,
    /// `lunch|dinner|other`.
    pub meal_type: String,
    pub recipe_title: String,
    pub servings: f64,
    /// Whole meal excluded from the next export.
    pub excluded: bool,
    pub ingredients: Vec<MealIngredientView>,
}

/// Response envelope for per-meal shopping views.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekGroupsResponse {
    pub ok: bool,
    pub message: String,
    pub groups: Vec<MealGroupView>,
}

/// One consolidated shopping line.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItemView {
    pub name: String,
    pub display_with_unit: String,
    pub is_approximate: bool,
}

/// Response envelope for the consolidated list.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekListResponse {
    pub ok: bool,
    pub message: String,
    pub items: Vec<ShoppingItemView>,
    /// Plain-text rendering for clipboard sharing.
    pub text: String,
}

/// Response envelope for export payload shaping.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPayloadResponse {
    pub ok: bool,
    pub message: String,
    /// Serialized snapshot payload; empty on failure.
    pub payload_json: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingActionResponse {
    pub ok: bool,
    pub message: String,
}

impl ShoppingActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Lists the week's meals with exclusion flags.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - `week_date` is any `yyyy-MM-dd` day inside the week.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn week_shopping_groups(
    household_id: String,
    week_date: String,
    household_json: String,
) -> WeekGroupsResponse {
    let result = with_week(
        "week_shopping_groups",
        &household_id,
        &week_date,
        &household_json,
        |service, groups| {
            let locale = active_locale();
            let views = groups
                .iter()
                .map(|group| MealGroupView {
                    id: group.id.clone(),
                    date: group.date.format("%Y-%m-%d").to_string(),
                    meal_type: group.meal_type.as_str().to_string(),
                    recipe_title: group.recipe_title.clone(),
                    servings: group.servings,
                    excluded: service.state().is_meal_fully_excluded(group),
                    ingredients: group
                        .ingredients
                        .iter()
                        .map(|ingredient| MealIngredientView {
                            id: ingredient.id.clone(),
                            name: ingredient.name.clone(),
                            display_with_unit: to_human_quantity_with_locale(
                                ingredient.amount,
                                &ingredient.unit,
                                locale,
                            )
                            .display_with_unit,
                            excluded: service.is_excluded(group, ingredient),
                        })
                        .collect(),
                })
                .collect::<Vec<_>>();
            Ok(views)
        },
    );

    match result {
        Ok(groups) => WeekGroupsResponse {
            ok: true,
            message: format!("Found {} meal(s).", groups.len()),
            groups,
        },
        Err(err) => WeekGroupsResponse {
            ok: false,
            message: format!("week_shopping_groups failed: {err}"),
            groups: Vec::new(),
        },
    }
}

/// Consolidated list of everything not excluded.
#[flutter_rust_bridge::frb(sync)]
pub fn week_shopping_list(
    household_id: String,
    week_date: String,
    household_json: String,
) -> WeekListResponse {
    let result = with_week(
        "week_shopping_list",
        &household_id,
        &week_date,
        &household_json,
        |service, groups| {
            let state = service.state();
            Ok(mealplan_core::flatten_meal_groups(
                groups,
                |group, ingredient| !state.is_excluded(group, ingredient),
                active_locale(),
            ))
        },
    );

    match result {
        Ok(items) => WeekListResponse {
            ok: true,
            message: format!("{} item(s) to buy.", items.len()),
            text: render_shopping_list_text(&items),
            items: items
                .into_iter()
                .map(|item| ShoppingItemView {
                    name: item.name,
                    display_with_unit: item.quantity.display_with_unit,
                    is_approximate: item.quantity.is_approximate,
                })
                .collect(),
        },
        Err(err) => WeekListResponse {
            ok: false,
            message: format!("week_shopping_list failed: {err}"),
            items: Vec::new(),
            text: String::new(),
        },
    }
}

/// Toggles a whole meal in or out of the next export.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_meal(
    household_id: String,
    week_date: String,
    household_json: String,
    meal_id: String,
) -> ShoppingActionResponse {
    let result = with_week(
        "toggle_meal",
        &household_id,
        &week_date,
        &household_json,
        |service, groups| {
            let group = find_group(groups, &meal_id)?;
            service.toggle_meal(group).map_err(store_failed)?;
            Ok(service.state().is_meal_fully_excluded(group))
        },
    );
    match result {
        Ok(true) => ShoppingActionResponse::success("Meal excluded."),
        Ok(false) => ShoppingActionResponse::success("Meal included."),
        Err(err) => ShoppingActionResponse::failure(format!("toggle_meal failed: {err}")),
    }
}

/// Toggles one ingredient line of a meal.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_ingredient(
    household_id: String,
    week_date: String,
    household_json: String,
    meal_id: String,
    ingredient_id: String,
) -> ShoppingActionResponse {
    let result = with_week(
        "toggle_ingredient",
        &household_id,
        &week_date,
        &household_json,
        |service, groups| {
            let group = find_group(groups, &meal_id)?;
            let ingredient = find_ingredient(group, &ingredient_id)?;
            service
                .toggle_ingredient(group, &ingredient.id)
                .map_err(store_failed)?;
            Ok(service.is_excluded(group, ingredient))
        },
    );
    match result {
        Ok(true) => ShoppingActionResponse::success("Ingredient excluded."),
        Ok(false) => ShoppingActionResponse::success("Ingredient included."),
        Err(err) => ShoppingActionResponse::failure(format!("toggle_ingredient failed: {err}")),
    }
}

/// Clears all exclusions for the week.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_week(household_id: String, week_date: String) -> ShoppingActionResponse {
    let result = with_week(
        "reset_week",
        &household_id,
        &week_date,
        "{}",
        |service, _| service.reset_week().map_err(store_failed),
    );
    match result {
        Ok(()) => ShoppingActionResponse::success("Selection reset."),
        Err(err) => ShoppingActionResponse::failure(format!("reset_week failed: {err}")),
    }
}

/// Shapes the export payload Dart publishes to the grocery app.
///
/// # FFI contract
/// - Fails in local-only mode and when every ingredient is excluded.
/// - Does not change inclusion state; call `confirm_week_exported` after a
///   successful publish.
#[flutter_rust_bridge::frb(sync)]
pub fn week_export_payload(
    household_id: String,
    week_date: String,
    household_json: String,
) -> ExportPayloadResponse {
    let result = with_week(
        "week_export_payload",
        &household_id,
        &week_date,
        &household_json,
        |service, groups| {
            if active_config().share_mode == ShareMode::LocalOnly {
                return Err(CallError::new(
                    "share_unavailable",
                    "sharing is not available in local-only mode",
                ));
            }
            let week = service
                .active_week()
                .map(|key| key.week)
                .ok_or_else(|| CallError::new("week_not_loaded", "week not loaded"))?;
            let state = service.state();
            let payload = build_snapshot_payload(
                groups,
                |group, ingredient| !state.is_excluded(group, ingredient),
                week,
                active_locale(),
            )
            .map_err(|err| CallError::new("empty_snapshot", err.to_string()))?;
            serde_json::to_string(&payload)
                .map_err(|err| CallError::new("payload_encode_failed", err.to_string()))
        },
    );

    match result {
        Ok(payload_json) => ExportPayloadResponse {
            ok: true,
            message: "Payload ready.".to_string(),
            payload_json,
        },
        Err(err) => ExportPayloadResponse {
            ok: false,
            message: format!("week_export_payload failed: {err}"),
            payload_json: String::new(),
        },
    }
}

/// Marks every meal with included lines as exported (excluded).
#[flutter_rust_bridge::frb(sync)]
pub fn confirm_week_exported(
    household_id: String,
    week_date: String,
    household_json: String,
) -> ShoppingActionResponse {
    let result = with_week(
        "confirm_week_exported",
        &household_id,
        &week_date,
        &household_json,
        |service, groups| {
            let state = service.state();
            let exported: Vec<MealGroup> = groups
                .iter()
                .filter(|group| {
                    group
                        .ingredients
                        .iter()
                        .any(|ingredient| !state.is_excluded(group, ingredient))
                })
                .cloned()
                .collect();
            service
                .mark_groups_excluded(&exported)
                .map_err(store_failed)?;
            Ok(exported.len())
        },
    );
    match result {
        Ok(count) => ShoppingActionResponse::success(format!("{count} meal(s) marked exported.")),
        Err(err) => {
            ShoppingActionResponse::failure(format!("confirm_week_exported failed: {err}"))
        }
    }
}

/// Failure of one week-scoped call.
///
/// Only `code` is logged. `message` goes back to the caller and may embed
/// meal and ingredient ids, which carry recipe and ingredient names.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CallError {
    code: &'static str,
    message: String,
}

impl CallError {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl Display for CallError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

fn store_failed(err: impl Display) -> CallError {
    CallError::new("store_failed", err.to_string())
}

fn failure_log_line(call: &str, err: &CallError) -> String {
    format!(
        "event=ffi_call module=ffi status=error call={call} error_code={}",
        err.code
    )
}

fn with_week<T>(
    call: &'static str,
    household_id: &str,
    week_date: &str,
    household_json: &str,
    f: impl FnOnce(&mut InclusionService<SqliteKeyValueStore<'_>>, &[MealGroup]) -> Result<T, CallError>,
) -> Result<T, CallError> {
    let result = run_week(household_id, week_date, household_json, f);
    if let Err(err) = &result {
        warn!("{}", failure_log_line(call, err));
    }
    result
}

fn run_week<T>(
    household_id: &str,
    week_date: &str,
    household_json: &str,
    f: impl FnOnce(&mut InclusionService<SqliteKeyValueStore<'_>>, &[MealGroup]) -> Result<T, CallError>,
) -> Result<T, CallError> {
    let household_id = household_id.trim();
    if household_id.is_empty() {
        return Err(CallError::new(
            "invalid_household_id",
            "household id cannot be empty",
        ));
    }
    let date = NaiveDate::parse_from_str(week_date.trim(), "%Y-%m-%d")
        .map_err(|err| {
            CallError::new(
                "invalid_week_date",
                format!("invalid week date `{}`: {err}", week_date.trim()),
            )
        })?;
    let household = HouseholdSnapshot::from_json_str(household_json)
        .map_err(|err| CallError::new("invalid_household_json", err))?;
    let key = WeekKey::new(household_id, WeekRange::containing(date));

    let conn = open_db(resolve_store_db_path()).map_err(|err| {
        CallError::new("store_open_failed", format!("store open failed: {err}"))
    })?;
    let mut service =
        InclusionService::with_config(SqliteKeyValueStore::new(&conn), active_config());
    service.load_week(key.clone()).map_err(store_failed)?;

    let groups = build_meal_groups(
        &household.entries(household_id),
        &household.recipes(household_id),
        key.week.interval(),
        active_locale(),
    );
    service.reconcile(&groups).map_err(store_failed)?;
    f(&mut service, &groups)
}

fn find_group<'a>(groups: &'a [MealGroup], meal_id: &str) -> Result<&'a MealGroup, CallError> {
    groups
        .iter()
        .find(|group| group.id == meal_id)
        .ok_or_else(|| CallError::new("meal_not_found", format!("meal not found: {meal_id}")))
}

fn find_ingredient<'a>(
    group: &'a MealGroup,
    ingredient_id: &str,
) -> Result<&'a MealIngredient, CallError> {
    group.ingredient(ingredient_id).ok_or_else(|| {
        CallError::new(
            "ingredient_not_found",
            format!("ingredient not found: {ingredient_id}"),
        )
    })
}

fn active_config() -> &'static CoreConfig {
    CORE_CONFIG.get_or_init(CoreConfig::default)
}

fn active_locale() -> Locale {
    active_config().number_locale()
}

fn resolve_store_db_path() -> PathBuf {
    STORE_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(STORE_DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(STORE_DB_FILE_NAME)
        })
        .clone()
}

fn category_label(category: mealplan_core::UnitCategory) -> &'static str {
    match category {
        mealplan_core::UnitCategory::Weight => "weight",
        mealplan_core::UnitCategory::Volume => "volume",
        mealplan_core::UnitCategory::Count => "count",
        mealplan_core::UnitCategory::Other => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::{
        configure_core, configure_store_path, confirm_week_exported, core_version,
        failure_log_line, find_group, find_ingredient, human_quantity, init_logging, ping,
        reset_week, run_week, toggle_ingredient, toggle_meal, week_export_payload,
        week_shopping_groups, week_shopping_list,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    const MEAL_ID: &str = "2024-05-06::dinner::r1";
    const RICE_ID: &str = "2024-05-06::dinner::r1::rijst::g";

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn core_version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), "   ".to_string());
        assert!(error.contains("log_dir"));
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let dir = std::env::temp_dir().join(unique_token("mealplan-ffi-log"));
        let error = init_logging("verbose".to_string(), dir.display().to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn configure_core_rejects_malformed_json() {
        assert!(!configure_core("{not json".to_string()).is_empty());
    }

    #[test]
    fn configure_core_accepts_default_config() {
        assert_eq!(configure_core("{}".to_string()), "");
    }

    #[test]
    fn configure_store_path_rejects_blank_path() {
        assert!(!configure_store_path("  ".to_string()).is_empty());
    }

    #[test]
    fn human_quantity_formats_with_default_locale() {
        let view = human_quantity(333.0, "g".to_string());
        assert_eq!(view.rounded_amount, 335.0);
        assert_eq!(view.category, "weight");
        assert_eq!(view.display_with_unit, "335 g");
    }

    #[test]
    fn groups_expose_scaled_ingredients() {
        let household = unique_token("household");
        let response = week_shopping_groups(household, "2024-05-08".to_string(), fixture());

        assert!(response.ok, "{}", response.message);
        assert_eq!(response.groups.len(), 1);
        let group = &response.groups[0];
        assert_eq!(group.id, MEAL_ID);
        assert_eq!(group.recipe_title, "Rijst met kip");
        assert!(!group.excluded);
        let rice = group
            .ingredients
            .iter()
            .find(|ingredient| ingredient.id == RICE_ID)
            .expect("rice line should exist");
        assert_eq!(rice.display_with_unit, "400 g");
    }

    #[test]
    fn toggles_persist_between_calls() {
        let household = unique_token("household");

        let toggled = toggle_ingredient(
            household.clone(),
            "2024-05-06".to_string(),
            fixture(),
            MEAL_ID.to_string(),
            RICE_ID.to_string(),
        );
        assert!(toggled.ok, "{}", toggled.message);

        let list = week_shopping_list(household.clone(), "2024-05-12".to_string(), fixture());
        assert!(list.ok, "{}", list.message);
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].name, "Kip");

        let meal = toggle_meal(
            household.clone(),
            "2024-05-06".to_string(),
            fixture(),
            MEAL_ID.to_string(),
        );
        assert!(meal.ok, "{}", meal.message);
        let groups = week_shopping_groups(household, "2024-05-06".to_string(), fixture());
        assert!(groups.groups[0].excluded);
    }

    #[test]
    fn reset_week_restores_full_list() {
        let household = unique_token("household");
        let meal = toggle_meal(
            household.clone(),
            "2024-05-06".to_string(),
            fixture(),
            MEAL_ID.to_string(),
        );
        assert!(meal.ok, "{}", meal.message);

        let reset = reset_week(household.clone(), "2024-05-09".to_string());
        assert!(reset.ok, "{}", reset.message);

        let list = week_shopping_list(household, "2024-05-06".to_string(), fixture());
        assert_eq!(list.items.len(), 2);
        assert!(list.text.contains("- 400 g Rijst"));
    }

    #[test]
    fn export_payload_then_confirm_excludes_meals() {
        let household = unique_token("household");

        let payload = week_export_payload(household.clone(), "2024-05-06".to_string(), fixture());
        assert!(payload.ok, "{}", payload.message);
        let value: serde_json::Value =
            serde_json::from_str(&payload.payload_json).expect("payload should be json");
        assert_eq!(value["sourceWeekStart"], "2024-05-06");
        assert_eq!(value["items"].as_array().map(Vec::len), Some(2));

        let confirmed =
            confirm_week_exported(household.clone(), "2024-05-06".to_string(), fixture());
        assert!(confirmed.ok, "{}", confirmed.message);

        let again = week_export_payload(household, "2024-05-06".to_string(), fixture());
        assert!(!again.ok);
        assert!(again.payload_json.is_empty());
    }

    #[test]
    fn unknown_ingredient_is_reported_without_logging_its_name() {
        let household = unique_token("household");
        let missing = "2024-05-06::dinner::r1::geheimkruid::snufje";

        let response = toggle_ingredient(
            household.clone(),
            "2024-05-06".to_string(),
            fixture(),
            MEAL_ID.to_string(),
            missing.to_string(),
        );
        assert!(!response.ok);
        assert!(response.message.contains("ingredient not found"));

        let err = run_week(&household, "2024-05-06", &fixture(), |_, groups| {
            let group = find_group(groups, MEAL_ID)?;
            find_ingredient(group, missing).map(|_| ())
        })
        .expect_err("missing ingredient should fail");
        let line = failure_log_line("toggle_ingredient", &err);
        assert!(line.contains("error_code=ingredient_not_found"));
        assert!(!line.contains("geheimkruid"));
        assert!(!line.contains(missing));
    }

    #[test]
    fn unknown_meal_is_reported() {
        let response = toggle_meal(
            unique_token("household"),
            "2024-05-06".to_string(),
            fixture(),
            "2024-05-06::lunch::missing".to_string(),
        );
        assert!(!response.ok);
        assert!(response.message.contains("meal not found"));
    }

    #[test]
    fn invalid_week_date_is_reported() {
        let response = week_shopping_list(
            unique_token("household"),
            "06-05-2024".to_string(),
            fixture(),
        );
        assert!(!response.ok);
        assert!(response.message.contains("invalid week date"));
    }

    fn fixture() -> String {
        serde_json::json!({
            "recipes": [{
                "id": "r1",
                "title": "Rijst met kip",
                "baseServings": 2,
                "ingredients": [
                    { "name": "Rijst", "amount": 200, "unit": "g" },
                    { "name": "Kip", "amount": 300, "unit": "g" }
                ]
            }],
            "mealPlan": [{
                "id": "m1",
                "date": "2024-05-06",
                "mealType": "dinner",
                "recipeId": "r1",
                "servings": 4
            }]
        })
        .to_string()
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
