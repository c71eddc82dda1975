//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::postgres::PlaceStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Place repository backed by the PostgreSQL pool.
    pub place_store: Arc<PlaceStore>,
}
