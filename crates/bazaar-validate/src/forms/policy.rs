//! Shopping-policy creation and editing.
//!
//! Policies constrain what a basket may contain. The `policy_type` selector
//! (codes "1" through "4") decides whether the policy targets the whole
//! basket, one product, one category, or a weekday; only the product and
//! category names carry client-side rules, and both are optional free text.

use crate::checks::identifier;
use crate::messages;
use crate::report::{ReportBuilder, ValidationReport};

/// Which policy shape the form is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    /// Min/max quantity over the whole basket.
    Basket,
    /// Min/max quantity of one product.
    Product,
    /// Min/max quantity within one category.
    Category,
    /// No purchases on a given weekday.
    Day,
}

impl PolicyKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::Basket),
            "2" => Some(Self::Product),
            "3" => Some(Self::Category),
            "4" => Some(Self::Day),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Basket => "1",
            Self::Product => "2",
            Self::Category => "3",
            Self::Day => "4",
        }
    }

    fn uses_product(&self) -> bool {
        matches!(self, Self::Product)
    }

    fn uses_category(&self) -> bool {
        matches!(self, Self::Category)
    }
}

pub fn policy(product_name: &str, category: &str, kind: PolicyKind) -> ValidationReport {
    let builder = ReportBuilder::new();
    let builder = if kind.uses_product() {
        builder.field(
            messages::PRODUCT_NAME,
            identifier::product_name_optional(product_name),
        )
    } else {
        builder.exclude(messages::PRODUCT_NAME)
    };
    let builder = if kind.uses_category() {
        builder.field(messages::CATEGORY, identifier::category_optional(category))
    } else {
        builder.exclude(messages::CATEGORY)
    };
    builder.build()
}
