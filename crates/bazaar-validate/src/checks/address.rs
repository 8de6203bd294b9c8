//! Shipping address fields.
//!
//! Country, city and street are required letters-and-spaces fields; a blank
//! value reports the same "Invalid ... Name" message as a malformed one.
//! House number is a required non-negative integer but a blank one fails
//! silently. Floor and apartment are optional.

use crate::messages;
use crate::patterns;
use crate::report::FieldOutcome;

fn required_part(value: &str, invalid_msg: &str) -> FieldOutcome {
    if value.is_empty() || !patterns::ADDRESS.is_match(value) {
        FieldOutcome::fail(invalid_msg)
    } else {
        FieldOutcome::Pass
    }
}

pub fn country(value: &str) -> FieldOutcome {
    required_part(value, messages::COUNTRY_INVALID)
}

pub fn city(value: &str) -> FieldOutcome {
    required_part(value, messages::CITY_INVALID)
}

pub fn street(value: &str) -> FieldOutcome {
    required_part(value, messages::STREET_INVALID)
}

/// Required non-negative integer; blank fails without a message.
pub fn house_number(value: &str) -> FieldOutcome {
    if value.is_empty() {
        FieldOutcome::FailSilent
    } else if !patterns::NON_NEGATIVE_INT.is_match(value) {
        FieldOutcome::fail(messages::HOUSE_NUMBER_INVALID)
    } else {
        FieldOutcome::Pass
    }
}

/// Optional non-negative integer.
pub fn floor(value: &str) -> FieldOutcome {
    if value.is_empty() || patterns::NON_NEGATIVE_INT.is_match(value) {
        FieldOutcome::Pass
    } else {
        FieldOutcome::fail(messages::FLOOR_INVALID)
    }
}

/// Optional, same charset as the other address parts.
pub fn apartment(value: &str) -> FieldOutcome {
    if value.is_empty() || patterns::ADDRESS.is_match(value) {
        FieldOutcome::Pass
    } else {
        FieldOutcome::fail(messages::APARTMENT_INVALID)
    }
}
