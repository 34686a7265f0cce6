//! Storage error types.

/// Storage error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No user registered under the given name.
    #[error("user not found")]
    UserNotFound,

    /// Backend error (database, corrupt row, etc.).
    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create a backend error from any error type.
    #[inline]
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Backend(err.to_string())
    }
}
