//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use foldertree_core::types::FolderId;

use crate::path;

/// A folder in the namespace forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Display name.
    pub name: String,
    /// Parent folder ID (null for root-level folders).
    pub parent_id: Option<FolderId>,
    /// Full materialized path (e.g., `/documents/reports`).
    pub path: String,
    /// When the folder was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the folder was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data required to insert a folder row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFolder {
    /// Caller-supplied identifier.
    pub id: FolderId,
    /// Display name.
    pub name: String,
    /// Parent folder (None for root).
    pub parent_id: Option<FolderId>,
    /// Full materialized path, stored verbatim.
    pub path: String,
}

impl NewFolder {
    /// A root-level folder whose path is `/{name}`.
    pub fn root(id: impl Into<FolderId>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            path: path::root_path(&name),
            name,
            parent_id: None,
        }
    }

    /// A folder placed under `parent`, with the path extended from the
    /// parent's stored path.
    pub fn child_of(parent: &Folder, id: impl Into<FolderId>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            path: path::child_path(&parent.path, &name),
            name,
            parent_id: Some(parent.id.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: &str, parent: Option<&str>, path: &str) -> Folder {
        Folder {
            id: FolderId::new(id),
            name: id.to_string(),
            parent_id: parent.map(FolderId::new),
            path: path.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(folder("F1", None, "/F1")).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "id": "F1",
                "name": "F1",
                "parentId": null,
                "path": "/F1",
                "createdAt": null,
                "updatedAt": null,
            })
        );
    }

    #[test]
    fn test_child_of_extends_path() {
        let parent = folder("F1", None, "/docs");
        let child = NewFolder::child_of(&parent, "F2", "reports");
        assert_eq!(child.parent_id, Some(FolderId::new("F1")));
        assert_eq!(child.path, "/docs/reports");

        let root = NewFolder::root("F3", "media");
        assert!(root.parent_id.is_none());
        assert_eq!(root.path, "/media");
    }
}
