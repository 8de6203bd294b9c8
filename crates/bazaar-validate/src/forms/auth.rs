//! Registration and login forms.

use crate::checks::{credential, identifier};
use crate::messages;
use crate::report::{ReportBuilder, ValidationReport};

pub fn registration(
    username: &str,
    email: &str,
    password: &str,
    confirmation: &str,
) -> ValidationReport {
    ReportBuilder::new()
        .field(messages::USERNAME, identifier::username(username))
        .field(messages::EMAIL, credential::email(email))
        .field(messages::PASS1, credential::password(password))
        .field(
            messages::PASS2,
            credential::confirm_password(password, confirmation),
        )
        .build()
}

pub fn login(username: &str, password: &str) -> ValidationReport {
    ReportBuilder::new()
        .field(messages::USERNAME, identifier::username(username))
        .field(messages::PASS1, credential::password(password))
        .build()
}
