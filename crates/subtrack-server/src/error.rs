//! Server error types.

use subtrack_config::ConfigError;
use subtrack_store::StoreError;

/// Error from one of the three subscription operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Request input rejected; nothing was mutated.
    #[error("{0}")]
    Validation(String),

    /// The user name is not registered.
    #[error("user {0} not registered")]
    UserNotFound(String),

    /// No non-free subscription covers the queried date.
    #[error("user {0} has no active plan on the requested date")]
    NoActivePlan(String),

    /// Persisting the new subscription failed; the notional charge is
    /// reported back as a refund.
    #[error("subscription failed, your money will be sent back")]
    Persistence {
        /// Refund amount (positive).
        amount: i64,
        #[source]
        source: StoreError,
    },

    /// Unexpected backend failure.
    #[error("store: {0}")]
    Store(#[from] StoreError),
}

/// Startup/runtime error for the server binary.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("store: {0}")]
    Store(#[from] StoreError),
}
