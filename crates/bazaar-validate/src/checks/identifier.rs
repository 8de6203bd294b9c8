//! Identifier-shaped fields: usernames, store and product names, categories,
//! brands.
//!
//! The strict rule accepts alphanumeric strings of at least two characters;
//! anything with whitespace or punctuation reports the "invalid characters"
//! message, while only the truly empty string reports the "empty" message.
//! Search filters use a relaxed single-character-minimum variant and treat
//! blank as "no filter".

use crate::messages;
use crate::patterns;
use crate::report::FieldOutcome;

fn required(value: &str, empty_msg: &str, invalid_msg: &str) -> FieldOutcome {
    if value.is_empty() {
        FieldOutcome::fail(empty_msg)
    } else if !patterns::IDENTIFIER.is_match(value) {
        FieldOutcome::fail(invalid_msg)
    } else {
        FieldOutcome::Pass
    }
}

fn optional(value: &str, invalid_msg: &str) -> FieldOutcome {
    if value.is_empty() || patterns::IDENTIFIER.is_match(value) {
        FieldOutcome::Pass
    } else {
        FieldOutcome::fail(invalid_msg)
    }
}

pub fn username(value: &str) -> FieldOutcome {
    required(value, messages::USER_NAME_EMPTY, messages::USER_NAME_INVALID)
}

pub fn store_name(value: &str) -> FieldOutcome {
    required(value, messages::STORE_NAME_EMPTY, messages::STORE_NAME_INVALID)
}

pub fn product_name(value: &str) -> FieldOutcome {
    required(
        value,
        messages::PRODUCT_NAME_EMPTY,
        messages::PRODUCT_NAME_INVALID,
    )
}

pub fn category(value: &str) -> FieldOutcome {
    required(value, messages::CATEGORY_EMPTY, messages::CATEGORY_INVALID)
}

/// Product name on a shopping-policy form; blank means "any product".
pub fn product_name_optional(value: &str) -> FieldOutcome {
    optional(value, messages::PRODUCT_NAME_INVALID)
}

/// Category on a shopping-policy form; blank means "any category".
pub fn category_optional(value: &str) -> FieldOutcome {
    optional(value, messages::CATEGORY_INVALID)
}

fn name_list(value: &str, invalid_msg: &str) -> FieldOutcome {
    if value.is_empty() {
        return FieldOutcome::Pass;
    }
    if value.contains(' ') || !patterns::NAME_LIST.is_match(value) {
        FieldOutcome::fail(invalid_msg)
    } else {
        FieldOutcome::Pass
    }
}

/// Comma-separated brand list on a product form; optional.
pub fn brand_list(value: &str) -> FieldOutcome {
    name_list(value, messages::BRANDS_NAME_INVALID)
}

/// Comma-separated category list on a product form; optional.
pub fn category_list(value: &str) -> FieldOutcome {
    name_list(value, messages::CATEGORIES_INVALID)
}

/// Store name in the store-search box; blank matches every store.
pub fn store_name_filter(value: &str) -> FieldOutcome {
    filter(value, messages::STORE_NAME_INVALID)
}

/// Relaxed filter shape shared by the product-search boxes.
pub fn filter(value: &str, invalid_msg: &str) -> FieldOutcome {
    if value.trim().is_empty() || patterns::IDENTIFIER_RELAXED.is_match(value) {
        FieldOutcome::Pass
    } else {
        FieldOutcome::fail(invalid_msg)
    }
}
