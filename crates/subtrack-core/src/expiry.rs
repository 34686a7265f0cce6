//! Expiry calculator.

use chrono::{Days, NaiveDate};

use crate::plan::Validity;

/// Compute the expiry date for a subscription.
///
/// Finite plans expire `days` after the effective start. Unbounded plans
/// map to the maximum representable date, independent of the start.
pub fn compute_expiry(effective_start: NaiveDate, validity: Validity) -> NaiveDate {
    match validity {
        Validity::Unbounded => NaiveDate::MAX,
        Validity::Finite(days) => effective_start
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX),
    }
}
