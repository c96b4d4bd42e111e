//! Unit classifier.
//!
//! Units are free text typed by users, mostly Dutch. Normalization trims,
//! lowercases and strips periods (`"Gr."` -> `"gr"`) before the lookup.

use serde::{Deserialize, Serialize};

const WEIGHT_UNITS: &[&str] = &["g", "gram", "gr", "kg", "kilo"];
const VOLUME_UNITS: &[&str] = &["ml", "milliliter", "l", "liter"];
const COUNT_UNITS: &[&str] = &[
    "", "stuk", "stuks", "teen", "teentje", "teentjes", "blad", "bladen", "blik", "blikje",
    "blikjes", "ui", "uien",
];

/// Semantic category of a unit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    Weight,
    Volume,
    /// Bare numbers and piece-like units.
    Count,
    Other,
}

/// Normalizes a unit for classification: trim, lowercase, strip periods.
pub fn normalize_unit(unit: &str) -> String {
    unit.trim().to_lowercase().replace('.', "")
}

/// Classifies a free-text unit. Unknown units map to `Other`.
pub fn classify_unit(unit: &str) -> UnitCategory {
    let normalized = normalize_unit(unit);
    let unit = normalized.as_str();
    if WEIGHT_UNITS.contains(&unit) {
        UnitCategory::Weight
    } else if VOLUME_UNITS.contains(&unit) {
        UnitCategory::Volume
    } else if COUNT_UNITS.contains(&unit) {
        UnitCategory::Count
    } else {
        UnitCategory::Other
    }
}

/// Returns whether the unit is the large variant of its category
/// (`kg`/`kilo`, `l`/`liter`), i.e. 1000 base units.
pub(crate) fn is_large_unit(unit: &str) -> bool {
    matches!(normalize_unit(unit).as_str(), "kg" | "kilo" | "l" | "liter")
}
