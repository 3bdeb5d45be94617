//! Route definitions for the FolderTree HTTP API.
//!
//! All routes are mounted under `/api/v1`. The router receives `AppState`
//! and passes it to handlers via Axum's `State` extractor.

use axum::{Router, middleware as axum_middleware, routing::get};

use crate::handlers;
use crate::middleware;
use crate::openapi;
use crate::state::AppState;

/// Prefix every route is nested under.
pub const API_PREFIX: &str = "/api/v1";

/// Build the Axum router with all routes and request logging.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(folder_routes())
        .merge(health_routes());

    Router::new()
        .nest(API_PREFIX, api_routes)
        .merge(openapi::swagger_ui())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Namespace listing endpoints
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/folders", get(handlers::folder::list_folders))
        .route("/folders/files", get(handlers::folder::list_files))
        .route(
            "/folders/{parentId}/children",
            get(handlers::folder::list_children),
        )
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
