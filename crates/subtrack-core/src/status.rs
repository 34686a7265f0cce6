//! Point-in-time status resolver.

use chrono::NaiveDate;
use serde::Serialize;

use crate::subscription::SubscriptionPeriod;

/// Active subscription status on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanStatus {
    /// Plan code of the covering subscription.
    pub plan_id: String,
    /// Whole days remaining until expiry; zero on the last valid day.
    pub days_left: i64,
}

/// Find the non-free subscription covering `query_date`.
///
/// Free-tier periods are never reported. Under the renewal resolver's
/// continuity guarantee at most one paid period covers any date; the
/// first match wins if that guarantee was bypassed.
pub fn resolve_status(
    subscriptions: &[SubscriptionPeriod],
    query_date: NaiveDate,
    free_plan_id: &str,
) -> Option<PlanStatus> {
    subscriptions
        .iter()
        .find(|sub| sub.plan_id != free_plan_id && sub.covers(query_date))
        .map(|sub| PlanStatus {
            plan_id: sub.plan_id.clone(),
            days_left: (sub.valid_till - query_date).num_days(),
        })
}
