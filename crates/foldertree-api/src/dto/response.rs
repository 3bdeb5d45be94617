//! Response DTOs.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use foldertree_core::types::ApiResponse;

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Store backend status: `"connected"` or `"unavailable"`.
    pub store: String,
}

/// Render a namespace envelope. Failed envelopes are served as 503 with
/// the same `{success, error}` body.
pub fn envelope_response<T: Serialize>(resp: ApiResponse<T>) -> Response {
    let status = if resp.success {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(resp)).into_response()
}
