//! In-memory storage backend.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use subtrack_core::SubscriptionPeriod;

use crate::error::StoreError;
use crate::traits::{NewSubscription, SubscriptionStore, UserDirectory, UserRef};

/// In-memory user directory and subscription store.
///
/// Suitable for tests and small single-process deployments with a fixed
/// user list. For dynamic user management use [`crate::SqlStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    /// user name -> assigned id
    users: HashMap<String, String>,
    /// assigned id -> stored periods, insertion order
    subscriptions: HashMap<String, Vec<SubscriptionPeriod>>,
    next_id: u64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with registered user names.
    ///
    /// # Example
    /// ```
    /// use subtrack_store::MemoryStore;
    ///
    /// let store = MemoryStore::with_users(["alice", "bob"]);
    /// ```
    pub fn with_users<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let store = Self::new();
        for name in names {
            store.add_user(name.as_ref());
        }
        store
    }

    /// Register a user, returning its reference. Idempotent per name.
    pub fn add_user(&self, user_name: &str) -> UserRef {
        let mut inner = self.inner.write();
        if let Some(id) = inner.users.get(user_name) {
            return UserRef::new(id.clone());
        }
        inner.next_id += 1;
        let id = format!("u{}", inner.next_id);
        inner.users.insert(user_name.to_owned(), id.clone());
        UserRef::new(id)
    }

    /// Number of registered users.
    pub fn user_count(&self) -> usize {
        self.inner.read().users.len()
    }
}

#[async_trait]
impl UserDirectory for MemoryStore {
    async fn resolve_user(&self, user_name: &str) -> Result<UserRef, StoreError> {
        self.inner
            .read()
            .users
            .get(user_name)
            .map(|id| UserRef::new(id.clone()))
            .ok_or(StoreError::UserNotFound)
    }
}

#[async_trait]
impl SubscriptionStore for MemoryStore {
    async fn insert(&self, sub: NewSubscription) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        inner
            .subscriptions
            .entry(sub.user.as_str().to_owned())
            .or_default()
            .push(sub.period);
        Ok(())
    }

    async fn list_for_user(&self, user: &UserRef) -> Result<Vec<SubscriptionPeriod>, StoreError> {
        let mut periods = self
            .inner
            .read()
            .subscriptions
            .get(user.as_str())
            .cloned()
            .unwrap_or_default();
        periods.sort_by_key(|p| p.valid_till);
        Ok(periods)
    }
}
