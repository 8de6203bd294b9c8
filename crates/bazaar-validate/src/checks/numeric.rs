//! Numeric and map-shaped discount fields.

use crate::messages;
use crate::patterns;
use crate::report::FieldOutcome;

/// Integer percentage between 1 and 99; required where applicable.
pub fn percent(value: &str) -> FieldOutcome {
    if patterns::PERCENT.is_match(value) {
        FieldOutcome::Pass
    } else {
        FieldOutcome::fail(messages::PERCENT_INVALID)
    }
}

/// Simple fraction such as `1/3` (one free per three bought); required
/// where applicable.
pub fn free_per_x(value: &str) -> FieldOutcome {
    if patterns::FREE_PER_X.is_match(value) {
        FieldOutcome::Pass
    } else {
        FieldOutcome::fail(messages::FREE_PER_X_INVALID)
    }
}

/// Optional `name:int[,name:int]*` map with integers >= 1
/// (overall product/category quantity thresholds).
pub fn quantity_map(value: &str) -> FieldOutcome {
    if value.is_empty() || patterns::NAME_QUANTITY_MAP.is_match(value) {
        FieldOutcome::Pass
    } else {
        FieldOutcome::fail(messages::NAME_NUMBER_MAP_INVALID)
    }
}

/// Optional `name:number[,name:number]*` map; the price variant allows
/// signed decimals.
pub fn price_map(value: &str) -> FieldOutcome {
    if value.is_empty() || patterns::NAME_PRICE_MAP.is_match(value) {
        FieldOutcome::Pass
    } else {
        FieldOutcome::fail(messages::NAME_NUMBER_MAP_INVALID)
    }
}

/// Optional non-negative integer; blank means "no minimum basket size".
pub fn basket_size(value: &str) -> FieldOutcome {
    if value.trim().is_empty() || patterns::NON_NEGATIVE_INT.is_match(value) {
        FieldOutcome::Pass
    } else {
        FieldOutcome::fail(messages::BASKET_SIZE_INVALID)
    }
}

/// Non-negative amount (quantity or price on the edit-product form).
pub fn non_negative_amount(value: f64) -> FieldOutcome {
    if value < 0.0 {
        FieldOutcome::fail(messages::POSITIVE_NUMBER_EXPECTED)
    } else {
        FieldOutcome::Pass
    }
}
