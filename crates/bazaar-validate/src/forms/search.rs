//! Store and product search filter forms.

use crate::checks::identifier;
use crate::messages;
use crate::report::{ReportBuilder, ValidationReport};

/// Store search accepts a blank name (matches everything); a present name
/// uses the relaxed filter shape.
pub fn search_stores(store_name: &str) -> ValidationReport {
    ReportBuilder::new()
        .field(messages::STORENAME, identifier::store_name_filter(store_name))
        .build()
}

/// Product search filters. Only the product name is required; the other
/// filters are optional and the price bounds must not cross.
#[derive(Debug, Clone, Default)]
pub struct ProductSearch {
    pub product_name: String,
    pub categories: String,
    pub stores_names: String,
    pub brands: String,
    pub min_price: f64,
    pub max_price: f64,
}

pub fn search_products(form: &ProductSearch) -> ValidationReport {
    ReportBuilder::new()
        .field(
            messages::PRODUCT_NAME,
            identifier::product_name(&form.product_name),
        )
        .field(
            messages::STORES_NAMES,
            identifier::filter(&form.stores_names, messages::STORE_NAME_INVALID),
        )
        .field(
            messages::BRANDS,
            identifier::filter(&form.brands, messages::BRANDS_NAME_INVALID),
        )
        .field(
            messages::CATEGORIES,
            identifier::filter(&form.categories, messages::CATEGORIES_INVALID),
        )
        // Crossed price bounds invalidate the search without a field message.
        .require(form.min_price <= form.max_price)
        .build()
}
