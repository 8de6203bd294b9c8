//! Purchase (checkout) payment form.

use crate::checks::{address, payment};
use crate::messages;
use crate::report::{ReportBuilder, ValidationReport};

/// Raw field values of the checkout form.
#[derive(Debug, Clone, Default)]
pub struct PaymentForm {
    pub credit_card: String,
    pub ccv: String,
    pub expiry_date: String,
    pub country: String,
    pub city: String,
    pub street: String,
    pub house_number: String,
    pub apartment: String,
    pub floor: String,
}

pub fn payment(form: &PaymentForm) -> ValidationReport {
    ReportBuilder::new()
        .field(
            messages::CREDIT_CARD,
            payment::credit_card_required(&form.credit_card),
        )
        .field(messages::CCV, payment::ccv(&form.ccv))
        .field(messages::EXPIRY_DATE, payment::expiry_date(&form.expiry_date))
        .field(messages::COUNTRY, address::country(&form.country))
        .field(messages::CITY, address::city(&form.city))
        .field(messages::STREET, address::street(&form.street))
        .field(messages::HOUSE_NUMBER, address::house_number(&form.house_number))
        .field(messages::APARTMENT, address::apartment(&form.apartment))
        .field(messages::FLOOR, address::floor(&form.floor))
        .build()
}
