//! Store creation and staff appointment forms.

use crate::checks::identifier;
use crate::messages;
use crate::report::{ReportBuilder, ValidationReport};

pub fn new_store(store_name: &str) -> ValidationReport {
    ReportBuilder::new()
        .field(messages::STORENAME, identifier::store_name(store_name))
        .build()
}

/// Appointing a store owner validates the appointee's username.
pub fn new_store_owner(username: &str) -> ValidationReport {
    ReportBuilder::new()
        .field(messages::USERNAME, identifier::username(username))
        .build()
}

/// Appointing a store manager validates the appointee's username.
pub fn new_store_manager(username: &str) -> ValidationReport {
    ReportBuilder::new()
        .field(messages::USERNAME, identifier::username(username))
        .build()
}
