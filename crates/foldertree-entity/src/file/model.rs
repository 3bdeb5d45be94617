//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use foldertree_core::types::{FileId, FolderId};

use crate::folder::model::Folder;
use crate::path;

/// A leaf entry that belongs to exactly one folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Unique file identifier.
    pub id: FileId,
    /// Display name.
    pub name: String,
    /// The folder containing this file.
    pub parent_id: FolderId,
    /// Full materialized path.
    pub path: String,
    /// File size in bytes.
    pub size: Option<i64>,
    /// When the file was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the file was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data required to insert a file row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFile {
    /// Caller-supplied identifier.
    pub id: FileId,
    /// Display name.
    pub name: String,
    /// The owning folder.
    pub parent_id: FolderId,
    /// Full materialized path, stored verbatim.
    pub path: String,
    /// Size in bytes; `None` lets the store apply its default of 0.
    pub size: Option<i64>,
}

impl NewFile {
    /// A file placed in `folder`, with the path extended from the folder's
    /// stored path.
    pub fn in_folder(folder: &Folder, id: impl Into<FileId>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            path: path::child_path(&folder.path, &name),
            name,
            parent_id: folder.id.clone(),
            size: None,
        }
    }

    /// Set an explicit size in bytes.
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> File {
        File {
            id: FileId::new("X1"),
            name: name.to_string(),
            parent_id: FolderId::new("F2"),
            path: format!("/F1/F2/{name}"),
            size: Some(42),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(file("a.txt")).expect("serialize");
        assert_eq!(json["parentId"], "F2");
        assert_eq!(json["size"], 42);
        assert!(json.get("parent_id").is_none());
        assert!(json["createdAt"].is_null());
    }
}
