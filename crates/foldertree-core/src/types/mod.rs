//! Core type definitions used across the FolderTree workspace.

pub mod id;
pub mod parent;
pub mod response;

pub use id::{FileId, FolderId, MAX_ID_LEN};
pub use parent::{ParentRef, ROOT_TOKEN};
pub use response::ApiResponse;
