//! Server startup and graceful shutdown.

use std::sync::Arc;

use subtrack_config::Config;
use subtrack_store::{
    MemoryStore, SqlStore, SqlStoreConfig, SubscriptionStore, UserDirectory,
};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::error::ServerError;
use crate::routes::app;
use crate::service::SubscriptionService;
use crate::state::AppState;

/// Run the server until the cancellation token fires.
pub async fn run_with_shutdown(
    config: Config,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    let (users, subscriptions) = build_stores(&config).await?;

    let catalog = config.plan_catalog();
    info!(
        plan_count = catalog.len(),
        free_plan = catalog.free_plan_id(),
        "plan catalog loaded"
    );

    let state = AppState::new(SubscriptionService::new(users, subscriptions, catalog));

    let listener = tokio::net::TcpListener::bind(&config.server.listen).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("server stopped");
    Ok(())
}

/// Build the storage collaborators from config: SQL when a database is
/// configured, seeded in-memory otherwise.
async fn build_stores(
    config: &Config,
) -> Result<(Arc<dyn UserDirectory>, Arc<dyn SubscriptionStore>), ServerError> {
    match &config.database {
        Some(db) => {
            let store = Arc::new(
                SqlStore::connect(
                    SqlStoreConfig::new(db.url.as_str())
                        .max_connections(db.max_connections)
                        .min_connections(db.min_connections)
                        .connect_timeout(std::time::Duration::from_secs(db.connect_timeout_secs)),
                )
                .await?,
            );
            store.init_schema().await?;
            info!(db_type = ?store.database_type(), "sql store connected");
            Ok((store.clone(), store))
        }
        None => {
            let store = Arc::new(MemoryStore::with_users(&config.users.names));
            info!(user_count = store.user_count(), "in-memory store seeded");
            Ok((store.clone(), store))
        }
    }
}
