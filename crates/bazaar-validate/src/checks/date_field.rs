//! Date-shaped form fields.

use crate::dates::FormDate;
use crate::messages;
use crate::patterns;
use crate::report::FieldOutcome;

/// Discount expiry date: required `d/m/yyyy`.
pub fn up_to_date(value: &str) -> FieldOutcome {
    if value.is_empty() {
        FieldOutcome::fail(messages::UP_TO_DATE_EMPTY)
    } else if !patterns::FULL_DATE.is_match(value) {
        FieldOutcome::fail(messages::UP_TO_DATE_INVALID)
    } else {
        FieldOutcome::Pass
    }
}

/// One end of a date-range query: optional, but when present it must match
/// `d/m/yyyy` and be a realizable calendar date.
pub fn range_date(value: &str, invalid_msg: &str) -> FieldOutcome {
    if value.is_empty() {
        return FieldOutcome::Pass;
    }
    if !patterns::FULL_DATE.is_match(value) {
        return FieldOutcome::fail(invalid_msg);
    }
    match FormDate::parse(value) {
        Some(date) if date.is_realizable() => FieldOutcome::Pass,
        _ => FieldOutcome::fail(invalid_msg),
    }
}
