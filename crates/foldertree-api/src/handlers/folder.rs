//! Namespace listing handlers.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use validator::Validate;

use foldertree_core::error::AppError;
use foldertree_core::types::ApiResponse;
use foldertree_entity::{File, Folder, FolderChildren};

use crate::dto::{ChildrenPath, envelope_response};
use crate::error::{ApiError, ApiErrorResponse};
use crate::extractors::path::path_params;
use crate::state::AppState;

/// GET /api/v1/folders
#[utoipa::path(
    get,
    path = "/api/v1/folders",
    tag = "Folders",
    summary = "Get all folders",
    description = "Retrieve all folders from the database",
    responses(
        (status = 200, description = "Every folder", body = ApiResponse<Vec<Folder>>),
        (status = 503, description = "Store unavailable", body = ApiResponse<Vec<Folder>>),
    )
)]
pub async fn list_folders(State(state): State<AppState>) -> Response {
    envelope_response(state.namespace_service.get_all_folders().await)
}

/// GET /api/v1/folders/files
#[utoipa::path(
    get,
    path = "/api/v1/folders/files",
    tag = "Folders",
    summary = "Get all files",
    description = "Retrieve all files from the database",
    responses(
        (status = 200, description = "Every file", body = ApiResponse<Vec<File>>),
        (status = 503, description = "Store unavailable", body = ApiResponse<Vec<File>>),
    )
)]
pub async fn list_files(State(state): State<AppState>) -> Response {
    envelope_response(state.namespace_service.get_all_files().await)
}

/// GET /api/v1/folders/{parentId}/children
#[utoipa::path(
    get,
    path = "/api/v1/folders/{parentId}/children",
    tag = "Folders",
    summary = "Get folder children",
    description = "Retrieve folders and files within a specific parent folder",
    params(
        ("parentId" = String, Path, description = "Folder id, or `root` for top-level folders")
    ),
    responses(
        (status = 200, description = "Immediate children", body = ApiResponse<FolderChildren>),
        (status = 400, description = "Malformed parentId", body = ApiErrorResponse),
        (status = 503, description = "Store unavailable", body = ApiResponse<FolderChildren>),
    )
)]
pub async fn list_children(
    State(state): State<AppState>,
    params: Result<Path<ChildrenPath>, PathRejection>,
) -> Result<Response, ApiError> {
    let params = path_params(params)?;
    params
        .validate()
        .map_err(|e| AppError::validation(format!("Invalid parentId: {e}")))?;

    let children = state
        .namespace_service
        .get_children_by_token(&params.parent_id)
        .await;

    Ok(envelope_response(children))
}
