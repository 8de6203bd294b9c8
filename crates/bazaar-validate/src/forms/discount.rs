//! Discount creation and editing.
//!
//! The `discount_type` selector decides which fields are semantically
//! required. Fields the current kind does not use are excluded from the pass:
//! they appear in the report with no message and do not affect validity.

use crate::checks::{date_field, identifier, numeric};
use crate::messages;
use crate::report::{ReportBuilder, ValidationReport};

/// Which discount shape the form is collecting (the `discount_type`
/// selector, codes "1" through "5").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountKind {
    /// Percentage off one product.
    ProductPercent,
    /// Free-per-X deal on one product.
    ProductFreePerX,
    /// Percentage off a category.
    CategoryPercent,
    /// Free-per-X deal on a category.
    CategoryFreePerX,
    /// Percentage off the whole basket.
    BasketPercent,
}

impl DiscountKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::ProductPercent),
            "2" => Some(Self::ProductFreePerX),
            "3" => Some(Self::CategoryPercent),
            "4" => Some(Self::CategoryFreePerX),
            "5" => Some(Self::BasketPercent),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::ProductPercent => "1",
            Self::ProductFreePerX => "2",
            Self::CategoryPercent => "3",
            Self::CategoryFreePerX => "4",
            Self::BasketPercent => "5",
        }
    }

    fn uses_product(&self) -> bool {
        matches!(self, Self::ProductPercent | Self::ProductFreePerX)
    }

    fn uses_category(&self) -> bool {
        matches!(self, Self::CategoryPercent | Self::CategoryFreePerX)
    }

    fn uses_free_per_x(&self) -> bool {
        matches!(self, Self::ProductFreePerX | Self::CategoryFreePerX)
    }

    fn uses_percent(&self) -> bool {
        !self.uses_free_per_x()
    }
}

/// Raw field values of the discount form.
#[derive(Debug, Clone, Default)]
pub struct DiscountForm {
    pub product_name: String,
    pub category: String,
    pub percent: String,
    pub free_per_x: String,
    pub overall_product_price: String,
    pub overall_category_price: String,
    pub overall_product_quantity: String,
    pub overall_category_quantity: String,
    pub up_to_date: String,
    pub basket_size: String,
}

pub fn discount(form: &DiscountForm, kind: DiscountKind) -> ValidationReport {
    let builder = ReportBuilder::new();
    let builder = if kind.uses_product() {
        builder.field(
            messages::PRODUCT_NAME,
            identifier::product_name(&form.product_name),
        )
    } else {
        builder.exclude(messages::PRODUCT_NAME)
    };
    let builder = if kind.uses_category() {
        builder.field(messages::CATEGORY, identifier::category(&form.category))
    } else {
        builder.exclude(messages::CATEGORY)
    };
    let builder = if kind.uses_percent() {
        builder.field(messages::PERCENT, numeric::percent(&form.percent))
    } else {
        builder.exclude(messages::PERCENT)
    };
    let builder = if kind.uses_free_per_x() {
        builder.field(messages::FREE_PER_X, numeric::free_per_x(&form.free_per_x))
    } else {
        builder.exclude(messages::FREE_PER_X)
    };
    builder
        .field(
            messages::OVERALL_PRODUCT_PRICE,
            numeric::price_map(&form.overall_product_price),
        )
        .field(
            messages::OVERALL_CATEGORY_PRICE,
            numeric::price_map(&form.overall_category_price),
        )
        .field(
            messages::OVERALL_PRODUCT_QUANTITY,
            numeric::quantity_map(&form.overall_product_quantity),
        )
        .field(
            messages::OVERALL_CATEGORY_QUANTITY,
            numeric::quantity_map(&form.overall_category_quantity),
        )
        .field(messages::UP_TO_DATE, date_field::up_to_date(&form.up_to_date))
        .field(messages::BASKET_SIZE, numeric::basket_size(&form.basket_size))
        .build()
}
