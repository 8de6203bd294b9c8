//! `d/m/yyyy` date handling shared by the date-shaped field rules.
//!
//! Form dates arrive as `d/m/yyyy` strings (1-2 digit day and month, 4-digit
//! year). Ordering is year first, then month, then day, which is also exposed
//! standalone as [`compare`] for range checks.

use std::cmp::Ordering;

use chrono::NaiveDate;

/// A calendar date parsed from `d/m/yyyy` form input.
///
/// Field order matters: deriving `Ord` over (year, month, day) yields the
/// chronological comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FormDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl FormDate {
    /// Parse `d/m/yyyy` input. Returns `None` when the shape or any numeric
    /// part does not parse; realizability is checked separately.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split('/');
        let day = parts.next()?.parse().ok()?;
        let month = parts.next()?.parse().ok()?;
        let year = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Whether the parts form a realizable calendar date
    /// (rejects 31/02/2021 and friends).
    pub fn is_realizable(&self) -> bool {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_some()
    }
}

/// Three-way comparison of two `d/m/yyyy` strings, year first, then month,
/// then day. Returns `None` when either side does not parse.
pub fn compare(a: &str, b: &str) -> Option<Ordering> {
    Some(FormDate::parse(a)?.cmp(&FormDate::parse(b)?))
}

/// Today's date rendered the way the date fields expect it (`dd/mm/yyyy`).
pub fn today_string() -> String {
    chrono::Local::now().date_naive().format("%d/%m/%Y").to_string()
}
