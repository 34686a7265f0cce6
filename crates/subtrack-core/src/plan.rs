//! Plan catalog types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How long a plan remains valid once started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Validity {
    /// Valid for a fixed number of days from the effective start date.
    Finite(u32),
    /// Never expires.
    Unbounded,
}

impl Validity {
    /// Whether this validity is the unbounded sentinel.
    #[inline]
    pub fn is_unbounded(self) -> bool {
        matches!(self, Validity::Unbounded)
    }
}

/// A catalog entry defining a subscription tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Catalog key, e.g. `PRO_1M`.
    pub id: String,
    /// Validity period.
    pub validity: Validity,
    /// Notional price in whole currency units. Non-negative.
    pub cost: i64,
}

impl Plan {
    /// Create a new plan entry.
    pub fn new(id: impl Into<String>, validity: Validity, cost: i64) -> Self {
        Self {
            id: id.into(),
            validity,
            cost,
        }
    }
}

/// The fixed set of valid plans, injected from configuration.
///
/// Also carries the distinguished free-tier code so the resolvers never
/// depend on a global constant for it.
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    plans: HashMap<String, Plan>,
    free_plan_id: String,
}

impl PlanCatalog {
    /// Build a catalog from plan entries and the free-tier code.
    ///
    /// Later duplicates of the same id replace earlier ones.
    pub fn new<I>(plans: I, free_plan_id: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = Plan>,
    {
        let plans = plans.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self {
            plans,
            free_plan_id: free_plan_id.into(),
        }
    }

    /// Look up a plan by id.
    #[inline]
    pub fn get(&self, id: &str) -> Option<&Plan> {
        self.plans.get(id)
    }

    /// Whether `id` is a member of the catalog.
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.plans.contains_key(id)
    }

    /// The distinguished free-tier plan code.
    #[inline]
    pub fn free_plan_id(&self) -> &str {
        &self.free_plan_id
    }

    /// Number of catalog entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Whether the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// All plan ids, sorted, for use in validation messages.
    pub fn plan_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.plans.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
