//! # foldertree-api
//!
//! HTTP API layer for FolderTree built on Axum.
//!
//! Exposes the namespace listing endpoints under `/api/v1`, a health
//! endpoint, CORS/compression/trace layers, request logging, and the
//! mapping from `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
