//! # foldertree-entity
//!
//! Entity models for FolderTree. `Folder` and `File` mirror the rows of
//! the `folders` and `files` tables and derive `sqlx::FromRow`; their JSON
//! form uses camelCase field names.

pub mod file;
pub mod folder;
pub mod path;

pub use file::{File, NewFile};
pub use folder::{Folder, FolderChildren, NewFolder};
