//! Subscription operations over the storage collaborators.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;
use subtrack_core::{
    compute_expiry, parse_date, resolve_start, resolve_status, today, PlanCatalog, PlanStatus,
    SubscriptionPeriod,
};
use subtrack_store::{
    NewSubscription, StoreError, SubscriptionStore, UserDirectory, UserRef,
};
use tracing::{debug, info};

use crate::error::ServiceError;

/// Outcome of a successful subscription creation.
#[derive(Debug, Clone)]
pub struct CreatedSubscription {
    /// The stored period, after renewal-continuity adjustment.
    pub period: SubscriptionPeriod,
    /// Charge reported to the caller (negative balance adjustment).
    pub amount: i64,
}

/// Orchestrates subscription creation, status queries and history listing.
pub struct SubscriptionService {
    users: Arc<dyn UserDirectory>,
    subscriptions: Arc<dyn SubscriptionStore>,
    catalog: PlanCatalog,
    /// Per-user creation locks. Serializes the load-resolve-insert
    /// sequence so two concurrent requests cannot both pass the overlap
    /// check against a stale history. Entries are never evicted; the map
    /// is bounded by the registered user population.
    creation_locks: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl SubscriptionService {
    /// Create a service over the given collaborators.
    pub fn new(
        users: Arc<dyn UserDirectory>,
        subscriptions: Arc<dyn SubscriptionStore>,
        catalog: PlanCatalog,
    ) -> Self {
        Self {
            users,
            subscriptions,
            catalog,
            creation_locks: Mutex::new(HashMap::new()),
        }
    }

    /// The plan catalog this service validates against.
    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    /// Create a subscription for `user_name` on `plan_id`, requested to
    /// start on `start_date` (`YYYY-MM-DD`, today or later).
    ///
    /// The effective start defers past the end of an overlapping paid
    /// period; a free-tier history never defers it.
    pub async fn create_subscription(
        &self,
        user_name: &str,
        plan_id: &str,
        start_date: &str,
    ) -> Result<CreatedSubscription, ServiceError> {
        let user = self.resolve_user(user_name).await?;

        let Some(plan) = self.catalog.get(plan_id) else {
            return Err(ServiceError::Validation(format!(
                "the plan should be one of {}",
                self.catalog.plan_ids().join(", ")
            )));
        };

        let requested = self.parse_current_or_future_date(start_date)?;

        // Hold the user's creation lock across load -> resolve -> insert.
        let lock = self.creation_lock(&user);
        let _guard = lock.lock().await;

        let history = self.subscriptions.list_for_user(&user).await?;
        let effective_start = resolve_start(&history, requested, self.catalog.free_plan_id());
        let valid_till = compute_expiry(effective_start, plan.validity);

        let period = SubscriptionPeriod {
            plan_id: plan.id.clone(),
            start_date: effective_start,
            valid_till,
        };

        if let Err(err) = self
            .subscriptions
            .insert(NewSubscription {
                user: user.clone(),
                period: period.clone(),
            })
            .await
        {
            return Err(ServiceError::Persistence {
                amount: plan.cost,
                source: err,
            });
        }

        info!(
            user = user_name,
            plan = %plan.id,
            start = %period.start_date,
            till = %period.valid_till,
            "subscription created"
        );

        Ok(CreatedSubscription {
            period,
            amount: -plan.cost,
        })
    }

    /// Status of the non-free subscription covering `date` (`YYYY-MM-DD`,
    /// today or later), with whole days remaining.
    pub async fn status_on(
        &self,
        user_name: &str,
        date: &str,
    ) -> Result<PlanStatus, ServiceError> {
        let query_date = self.parse_current_or_future_date(date)?;
        let user = self.resolve_user(user_name).await?;

        let history = self.subscriptions.list_for_user(&user).await?;
        resolve_status(&history, query_date, self.catalog.free_plan_id())
            .ok_or_else(|| ServiceError::NoActivePlan(user_name.to_owned()))
    }

    /// Full subscription history for `user_name`, oldest expiry first.
    ///
    /// An empty history is a valid (empty) result, not an error.
    pub async fn history(
        &self,
        user_name: &str,
    ) -> Result<Vec<SubscriptionPeriod>, ServiceError> {
        let user = self.resolve_user(user_name).await?;
        Ok(self.subscriptions.list_for_user(&user).await?)
    }

    async fn resolve_user(&self, user_name: &str) -> Result<UserRef, ServiceError> {
        match self.users.resolve_user(user_name).await {
            Ok(user) => Ok(user),
            Err(StoreError::UserNotFound) => {
                debug!(user = user_name, "unknown user");
                Err(ServiceError::UserNotFound(user_name.to_owned()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn parse_current_or_future_date(&self, input: &str) -> Result<NaiveDate, ServiceError> {
        let date = parse_date(input)
            .map_err(|_| ServiceError::Validation("enter a date in YYYY-MM-DD format".into()))?;
        if date < today() {
            return Err(ServiceError::Validation(
                "the date must be today or later".into(),
            ));
        }
        Ok(date)
    }

    fn creation_lock(&self, user: &UserRef) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.creation_locks.lock();
        locks
            .entry(user.as_str().to_owned())
            .or_default()
            .clone()
    }
}
