//! Route definitions.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::config::ServerConfig;
use crate::handlers::{self, AppState};

/// Create the API router.
///
/// # Arguments
/// * `config` - Server configuration (deployment guards)
pub fn create_router(config: ServerConfig) -> Router {
    let state = Arc::new(AppState { config });

    Router::new()
        // Health
        .route("/health", get(handlers::health))
        .route("/api/v1/health", get(handlers::health))
        // Projection
        .route(
            "/api/v1/calculate",
            get(handlers::get_calculate).post(handlers::post_calculate),
        )
        .with_state(state)
}
