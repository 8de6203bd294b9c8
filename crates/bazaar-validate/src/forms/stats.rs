//! Date-range query for the statistics view.

use std::cmp::Ordering;

use crate::checks::date_field;
use crate::dates;
use crate::messages;
use crate::report::{ReportBuilder, ValidationReport};

/// Both ends are optional; each present end must be a realizable `d/m/yyyy`
/// date, and a fully specified range must have start <= end.
pub fn date_range(start_date: &str, end_date: &str) -> ValidationReport {
    ReportBuilder::new()
        .field(
            messages::START_DATE,
            date_field::range_date(start_date, messages::INVALID_START_DATE),
        )
        .field(
            messages::END_DATE,
            date_field::range_date(end_date, messages::INVALID_END_DATE),
        )
        .require(dates::compare(start_date, end_date) != Some(Ordering::Greater))
        .build()
}
