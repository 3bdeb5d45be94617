//! Application builder: wires router, middleware, and state into an Axum
//! app and runs it.

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use foldertree_core::config::{AppConfig, CorsConfig};
use foldertree_core::error::AppError;
use foldertree_database::store::StoreManager;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> Router {
    build_router(state)
        .layer(build_compression_layer())
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Connects the configured store and serves HTTP until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!(provider = %config.store.provider, "Connecting namespace store...");
    let store = StoreManager::new(&config.store, &config.database).await?;

    let addr = config.server.bind_address();
    let cors = config.server.cors.clone();
    let app = build_app(AppState::new(config, store), &cors);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("FolderTree server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("FolderTree server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    info!("Shutdown signal received");
}
