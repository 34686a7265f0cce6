//! Shared application state.

use std::sync::Arc;

use crate::service::SubscriptionService;

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SubscriptionService>,
}

impl AppState {
    /// Wrap a service for sharing across handlers.
    pub fn new(service: SubscriptionService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
