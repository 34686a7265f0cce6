//! Calendar date helpers.
//!
//! All user-facing dates are day-granular `YYYY-MM-DD` strings; time of
//! day never enters the domain logic.

use chrono::{Local, NaiveDate};

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date parsing error.
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    /// Input is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    Invalid(String),
}

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| DateError::Invalid(input.to_owned()))
}

/// The server's current local calendar date.
///
/// Day granularity only; behavior exactly at a timezone boundary follows
/// the host clock's local offset.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
