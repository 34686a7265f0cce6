//! Subtrack server library.
//!
//! This module exposes the HTTP application and service layer for use by
//! integration tests and potential embedding scenarios.

pub mod cli;
mod error;
mod routes;
mod server;
mod service;
mod state;

pub use cli::ServerArgs;
pub use error::{ServerError, ServiceError};
pub use routes::app;
pub use server::run_with_shutdown;
pub use service::{CreatedSubscription, SubscriptionService};
pub use state::AppState;
pub use tokio_util::sync::CancellationToken;
