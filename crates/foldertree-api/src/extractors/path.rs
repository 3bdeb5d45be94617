//! Typed path parameter helpers.

use axum::extract::Path;
use axum::extract::rejection::PathRejection;

use foldertree_core::error::AppError;

/// Unwraps path parameters, turning a rejected segment (bad percent
/// encoding, invalid UTF-8) into a validation error.
pub fn path_params<T>(extracted: Result<Path<T>, PathRejection>) -> Result<T, AppError> {
    extracted
        .map(|Path(params)| params)
        .map_err(|e| AppError::validation(format!("Invalid path parameter: {}", e.body_text())))
}
