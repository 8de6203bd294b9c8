//! Field-level checks.
//!
//! Each function maps one raw field value to a [`FieldOutcome`]; checks never
//! mutate their input and are idempotent. Grouped by the kind of data the
//! field carries.

pub mod address;
pub mod credential;
pub mod date_field;
pub mod identifier;
pub mod numeric;
pub mod payment;
