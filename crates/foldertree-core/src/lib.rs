//! # foldertree-core
//!
//! Core crate for FolderTree. Contains configuration schemas, typed
//! identifiers, the root/folder parent reference, the response envelope
//! returned by every namespace operation, and the unified error system.
//!
//! This crate has **no** internal dependencies on other FolderTree crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
