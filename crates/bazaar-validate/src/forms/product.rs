//! Inventory product forms.

use crate::checks::{identifier, numeric};
use crate::messages;
use crate::report::{ReportBuilder, ValidationReport};

pub fn new_product(product_name: &str, brand: &str, categories: &str) -> ValidationReport {
    ReportBuilder::new()
        .field(messages::PRODUCT_NAME, identifier::product_name(product_name))
        .field(messages::BRAND, identifier::brand_list(brand))
        .field(messages::CATEGORIES, identifier::category_list(categories))
        .build()
}

/// Editing an existing product: the name is fixed, but brand/category lists
/// and the numeric amounts can change.
pub fn edit_product(brand: &str, categories: &str, quantity: f64, price: f64) -> ValidationReport {
    ReportBuilder::new()
        .field(messages::BRAND, identifier::brand_list(brand))
        .field(messages::CATEGORIES, identifier::category_list(categories))
        .field(messages::QUANTITY, numeric::non_negative_amount(quantity))
        .field(messages::PRICE, numeric::non_negative_amount(price))
        .build()
}
