//! Health check handler.

use axum::Json;
use axum::extract::State;

use foldertree_core::types::ApiResponse;
use foldertree_database::store::NamespaceStore;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// GET /api/v1/health
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "Health",
    summary = "Service health",
    responses((status = 200, description = "Service and store status", body = ApiResponse<HealthResponse>))
)]
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let store = match state.store.health_check().await {
        Ok(true) => "connected",
        Ok(false) => "unavailable",
        Err(e) => {
            tracing::warn!(error = %e, "Store health check failed");
            "unavailable"
        }
    };

    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: store.to_string(),
    }))
}
