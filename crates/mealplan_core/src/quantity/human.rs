//! Quantity normalizer.
//!
//! Turns a raw aggregated amount into a rounded, display-ready quantity.
//!
//! # Rounding policy
//! - weight: nearest 5 g, computed in grams (`kg`/`kilo` converted first).
//! - volume: nearest 10 ml, computed in milliliters (`l`/`liter` converted).
//! - count: snap to an integer within 0.15, else nearest 0.5; positive amounts
//!   never display below 1.
//! - other: one decimal.
//!
//! Only count quantities clamp up to 1. Small weights and volumes may still
//! round to 0.

use crate::locale::Locale;
use crate::quantity::unit::{classify_unit, is_large_unit, UnitCategory};
use serde::Serialize;

const WEIGHT_STEP: f64 = 5.0;
const VOLUME_STEP: f64 = 10.0;
const LARGE_UNIT_FACTOR: f64 = 1000.0;
const COUNT_SNAP_TOLERANCE: f64 = 0.15;
const APPROXIMATE_THRESHOLD: f64 = 0.10;
const APPROXIMATE_PREFIX: &str = "≈";

/// Rounded, display-ready quantity. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanQuantity {
    /// Input amount after non-finite values were replaced by 0.
    pub raw_amount: f64,
    /// Amount after the category rounding policy, in the input unit.
    pub rounded_amount: f64,
    /// Unit as given, trimmed.
    pub unit: String,
    pub category: UnitCategory,
    /// Rounding moved the value by more than 10%.
    pub is_approximate: bool,
    /// Plain number, e.g. `2,5`.
    pub display_amount: String,
    /// Number with `≈` when approximate, e.g. `≈2,5`.
    pub display_prefixed: String,
    /// Prefixed number plus unit, e.g. `≈2,5 stuk`. Unit omitted when empty.
    pub display_with_unit: String,
}

/// Rounds `amount` in `unit` using the default locale.
pub fn to_human_quantity(amount: f64, unit: &str) -> HumanQuantity {
    to_human_quantity_with_locale(amount, unit, Locale::default())
}

/// Rounds `amount` in `unit` and formats numbers for `locale`.
pub fn to_human_quantity_with_locale(amount: f64, unit: &str, locale: Locale) -> HumanQuantity {
    let raw_amount = if amount.is_finite() { amount } else { 0.0 };
    let category = classify_unit(unit);
    let large = is_large_unit(unit);

    let (rounded_amount, fraction_digits) = match category {
        UnitCategory::Weight => {
            let digits = if large { 3 } else { 0 };
            (round_in_base_unit(raw_amount, large, WEIGHT_STEP), digits)
        }
        UnitCategory::Volume => {
            let digits = if large { 2 } else { 0 };
            (round_in_base_unit(raw_amount, large, VOLUME_STEP), digits)
        }
        UnitCategory::Count => (round_count(raw_amount), 1),
        UnitCategory::Other => ((raw_amount * 10.0).round() / 10.0, 1),
    };

    let is_approximate = raw_amount > 0.0
        && ((rounded_amount - raw_amount).abs() / raw_amount) > APPROXIMATE_THRESHOLD;

    let display_amount = locale.format_number(rounded_amount, fraction_digits);
    let display_prefixed = if is_approximate {
        format!("{APPROXIMATE_PREFIX}{display_amount}")
    } else {
        display_amount.clone()
    };
    let unit = unit.trim().to_string();
    let display_with_unit = if unit.is_empty() {
        display_prefixed.clone()
    } else {
        format!("{display_prefixed} {unit}")
    };

    HumanQuantity {
        raw_amount,
        rounded_amount,
        unit,
        category,
        is_approximate,
        display_amount,
        display_prefixed,
        display_with_unit,
    }
}

fn round_in_base_unit(amount: f64, large: bool, step: f64) -> f64 {
    let factor = if large { LARGE_UNIT_FACTOR } else { 1.0 };
    let base = amount * factor;
    let rounded_base = (base / step).round() * step;
    rounded_base / factor
}

fn round_count(amount: f64) -> f64 {
    let nearest = amount.round();
    let rounded = if (amount - nearest).abs() <= COUNT_SNAP_TOLERANCE {
        nearest
    } else {
        (amount * 2.0).round() / 2.0
    };
    if amount > 0.0 && rounded < 1.0 {
        1.0
    } else {
        rounded
    }
}
