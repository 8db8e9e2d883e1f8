//! Month Tokens
//!
//! The service identifies months with short tokens such as `"Oct-26"`. The
//! store treats them as opaque; these helpers build and inspect them for the
//! prediction form and the history filters.

use chrono::{Datelike, NaiveDate};

use crate::constants::{PREDICTION_FIRST_YEAR, PREDICTION_YEAR_COUNT};

/// Month abbreviations in calendar order
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Normalize user input (`"oct"`, `"OCT"`) to a month abbreviation
pub fn parse_month_abbr(input: &str) -> Option<&'static str> {
    let input = input.trim();
    MONTHS
        .iter()
        .copied()
        .find(|m| m.eq_ignore_ascii_case(input))
}

/// Build a month token from an abbreviation and a four-digit year
pub fn month_token(abbr: &str, year: i32) -> String {
    format!("{abbr}-{:02}", year.rem_euclid(100))
}

/// Years offered by the prediction form
pub fn prediction_years() -> Vec<i32> {
    (PREDICTION_FIRST_YEAR..PREDICTION_FIRST_YEAR + PREDICTION_YEAR_COUNT).collect()
}

/// Default form selection: the month and year of `today`
pub fn default_target(today: NaiveDate) -> (&'static str, i32) {
    (MONTHS[today.month0() as usize], today.year())
}

/// Year label used by the history year filter (`"Jan-25"` -> `"2025"`)
pub fn year_label(token: &str) -> String {
    format!("20{}", token.split('-').nth(1).unwrap_or(""))
}
