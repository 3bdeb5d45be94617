//! Immediate children of a folder or of the root level.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::model::Folder;
use crate::file::model::File;

/// Direct child folders and files of one parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FolderChildren {
    /// Child folders.
    pub folders: Vec<Folder>,
    /// Child files. Always empty at the root level.
    pub files: Vec<File>,
}

impl FolderChildren {
    /// Whether the parent has no children at all.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }
}
