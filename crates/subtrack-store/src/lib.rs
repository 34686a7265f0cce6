//! Persistence backends for subtrack.
//!
//! This crate provides the two storage collaborators of the subscription
//! service: a user directory (name to opaque reference) and an append-only
//! subscription store. Both come in an in-memory flavor for tests and
//! small deployments, and a SQL flavor (PostgreSQL, MySQL, SQLite via
//! SQLx) for everything else.
//!
//! # Example
//!
//! ```
//! use subtrack_store::{MemoryStore, SubscriptionStore, UserDirectory};
//!
//! # async fn example() -> Result<(), subtrack_store::StoreError> {
//! let store = MemoryStore::with_users(["alice"]);
//! let user = store.resolve_user("alice").await?;
//! assert!(store.list_for_user(&user).await?.is_empty());
//! # Ok(())
//! # }
//! ```

mod error;
mod memory;
pub mod sql;
mod traits;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use sql::{SqlStore, SqlStoreConfig};
pub use traits::{NewSubscription, SubscriptionStore, UserDirectory, UserRef};
