//! places-service server entry point.
//!
//! Starts the Axum HTTP server with the places REST endpoints.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use places_service::api;
use places_service::app_state::AppState;
use places_service::config::ServiceConfig;
use places_service::persistence::postgres::PlaceStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ServiceConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting places-service");

    // Open the database pool; startup fails if the database is unreachable
    let place_store = Arc::new(PlaceStore::connect(&config).await?);
    tracing::info!("database pool established");

    // Build application state
    let app_state = AppState { place_store };

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
