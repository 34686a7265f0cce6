//! Storage traits.

use std::sync::Arc;

use async_trait::async_trait;
use subtrack_core::SubscriptionPeriod;

use crate::error::StoreError;

/// Opaque reference to a registered user.
///
/// Subscriptions reference users through this handle; they never own the
/// identity record itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserRef(String);

impl UserRef {
    /// Wrap a backend-assigned identifier.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The underlying identifier.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A subscription period to be persisted for a user.
#[derive(Debug, Clone)]
pub struct NewSubscription {
    /// Owning user.
    pub user: UserRef,
    /// The resolved period to store.
    pub period: SubscriptionPeriod,
}

/// Read-only user identity lookup.
///
/// Implementations must be thread-safe (`Send + Sync`) as they are called
/// concurrently from request handlers.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolve a user name to its stable reference.
    ///
    /// Returns [`StoreError::UserNotFound`] if no such user is registered.
    async fn resolve_user(&self, user_name: &str) -> Result<UserRef, StoreError>;
}

/// Durable subscription storage.
///
/// Records are append-only: this service never mutates or deletes a
/// stored period.
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    /// Persist a new subscription period.
    async fn insert(&self, sub: NewSubscription) -> Result<(), StoreError>;

    /// All periods stored for a user, ordered by `valid_till` ascending.
    async fn list_for_user(&self, user: &UserRef) -> Result<Vec<SubscriptionPeriod>, StoreError>;
}

/// Blanket implementation for `Arc<D>` where `D: UserDirectory`.
#[async_trait]
impl<D: UserDirectory + ?Sized> UserDirectory for Arc<D> {
    #[inline]
    async fn resolve_user(&self, user_name: &str) -> Result<UserRef, StoreError> {
        (**self).resolve_user(user_name).await
    }
}

/// Blanket implementation for `Arc<S>` where `S: SubscriptionStore`.
#[async_trait]
impl<S: SubscriptionStore + ?Sized> SubscriptionStore for Arc<S> {
    #[inline]
    async fn insert(&self, sub: NewSubscription) -> Result<(), StoreError> {
        (**self).insert(sub).await
    }

    #[inline]
    async fn list_for_user(&self, user: &UserRef) -> Result<Vec<SubscriptionPeriod>, StoreError> {
        (**self).list_for_user(user).await
    }
}
