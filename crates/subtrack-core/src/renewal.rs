//! Renewal continuity resolver.

use chrono::NaiveDate;

use crate::subscription::SubscriptionPeriod;

/// Compute the effective start date for a new subscription.
///
/// Looks at the existing period with the latest `valid_till`. A free-tier
/// period imposes no constraint; a paid period that would overlap the
/// requested date pushes the start to the day after it expires, so a user
/// moving between paid plans never gets a gap or an overlap.
pub fn resolve_start(
    history: &[SubscriptionPeriod],
    requested_start: NaiveDate,
    free_plan_id: &str,
) -> NaiveDate {
    let Some(latest) = history.iter().max_by_key(|sub| sub.valid_till) else {
        return requested_start;
    };

    if latest.plan_id == free_plan_id {
        return requested_start;
    }

    if requested_start < latest.valid_till {
        // Day after the running period ends; saturate at the calendar cap
        // so an unbounded paid period cannot overflow.
        latest.valid_till.succ_opt().unwrap_or(NaiveDate::MAX)
    } else {
        requested_start
    }
}
