//! Email and password rules for registration and login.

use crate::messages;
use crate::patterns;
use crate::report::FieldOutcome;

pub fn email(value: &str) -> FieldOutcome {
    if value.is_empty() {
        FieldOutcome::fail(messages::EMAIL_EMPTY)
    } else if !patterns::EMAIL.is_match(value) {
        FieldOutcome::fail(messages::EMAIL_INVALID)
    } else {
        FieldOutcome::Pass
    }
}

/// Password strength: lower case, upper case, digit, one of `!@#$%^&*`,
/// and at least the minimum length.
fn is_strong(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| "!@#$%^&*".contains(c))
        && value.chars().count() >= messages::PASS_MIN_LENGTH
}

/// Primary password. Strength and length failures are additive: both
/// messages are reported, newline-joined, when both apply.
pub fn password(value: &str) -> FieldOutcome {
    if value.is_empty() {
        return FieldOutcome::fail(messages::PASS1_EMPTY);
    }
    let mut failures = Vec::new();
    if !is_strong(value) {
        failures.push(messages::PASS1_NOT_GOOD_ENOUGH);
    }
    if value.chars().count() < messages::PASS_MIN_LENGTH {
        failures.push(messages::PASS_NOT_LONG_ENOUGH);
    }
    if failures.is_empty() {
        FieldOutcome::Pass
    } else {
        FieldOutcome::Fail(failures.join("\n"))
    }
}

/// Confirmation must equal the primary password verbatim.
pub fn confirm_password(password: &str, confirmation: &str) -> FieldOutcome {
    if confirmation.is_empty() {
        FieldOutcome::fail(messages::PASS2_EMPTY)
    } else if confirmation != password {
        FieldOutcome::fail(messages::PASS2_NOT_MATCH)
    } else {
        FieldOutcome::Pass
    }
}
