//! Client-side form validation for the Bazaar marketplace.
//!
//! A stateless rules library: per-field check functions compose into aggregate
//! validators, one per user operation (registration, login, new store, new
//! product, discounts, policies, checkout, searches, date-range queries).
//! Each pass produces a [`ValidationReport`] — a field-to-message map plus an
//! overall validity flag — and aggregates always evaluate every field so that
//! simultaneous failures all surface their messages.
//!
//! No I/O happens here; a report with `is_valid() == false` means the caller
//! must not issue the corresponding network request.

pub mod checks;
pub mod dates;
pub mod forms;
pub mod messages;
mod patterns;
mod report;

pub use report::{FieldOutcome, ReportBuilder, ValidationReport};
