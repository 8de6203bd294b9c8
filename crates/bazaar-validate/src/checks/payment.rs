//! Payment fields: credit card, CCV, expiry date.
//!
//! Blank CCV and expiry are invalid but report no message; the form highlights
//! the field without text, matching the established client behavior.

use crate::messages;
use crate::patterns;
use crate::report::FieldOutcome;

/// Credit card number where the flow allows omitting it (saved-card flows);
/// when present it must be exactly 16 digits.
pub fn credit_card_optional(value: &str) -> FieldOutcome {
    if value.is_empty() || patterns::CREDIT_CARD.is_match(value) {
        FieldOutcome::Pass
    } else {
        FieldOutcome::fail(messages::CREDIT_CARD_INVALID)
    }
}

/// Credit card number in the purchase flow: required, exactly 16 digits.
pub fn credit_card_required(value: &str) -> FieldOutcome {
    if patterns::CREDIT_CARD.is_match(value) {
        FieldOutcome::Pass
    } else {
        FieldOutcome::fail(messages::CREDIT_CARD_INVALID)
    }
}

/// Exactly 3 digits; blank is invalid without a message.
pub fn ccv(value: &str) -> FieldOutcome {
    if value.is_empty() {
        FieldOutcome::FailSilent
    } else if !patterns::CCV.is_match(value) {
        FieldOutcome::fail(messages::CCV_INVALID)
    } else {
        FieldOutcome::Pass
    }
}

/// `MM/YY` with MM in 01-12; blank is invalid without a message.
pub fn expiry_date(value: &str) -> FieldOutcome {
    if value.is_empty() {
        FieldOutcome::FailSilent
    } else if !patterns::EXPIRY_DATE.is_match(value) {
        FieldOutcome::fail(messages::EXPIRY_DATE_INVALID)
    } else {
        FieldOutcome::Pass
    }
}
