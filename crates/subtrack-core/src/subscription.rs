//! Subscription period record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One stored subscription period for a user.
///
/// `valid_till` is the last day the period covers; the renewal resolver
/// starts any follow-up paid period on the next day. For every record
/// `valid_till >= start_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionPeriod {
    /// Plan code from the catalog.
    pub plan_id: String,
    /// Calendar date the period begins.
    pub start_date: NaiveDate,
    /// Calendar date the period ends (inclusive).
    pub valid_till: NaiveDate,
}

impl SubscriptionPeriod {
    /// Whether `date` falls inside this period (inclusive on both ends).
    #[inline]
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.valid_till
    }
}
