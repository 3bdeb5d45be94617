//! Namespace read operations with root/children disambiguation.

use std::sync::Arc;

use tracing::{debug, error};

use foldertree_core::result::AppResult;
use foldertree_core::types::{ApiResponse, ParentRef};
use foldertree_database::store::NamespaceStore;
use foldertree_entity::{File, Folder, FolderChildren};

const FOLDERS_ERROR: &str = "Failed to fetch folders";
const FILES_ERROR: &str = "Failed to fetch files";
const CHILDREN_ERROR: &str = "Failed to fetch folder children";

/// Lists the namespace and the immediate children of a folder or the root.
///
/// Holds nothing but the store handle, so one instance can serve any
/// number of concurrent callers. Store failures never escape: they are
/// logged and turned into a failed [`ApiResponse`] with a generic message.
#[derive(Debug, Clone)]
pub struct NamespaceService {
    store: Arc<dyn NamespaceStore>,
}

impl NamespaceService {
    /// Creates a new namespace service.
    pub fn new(store: Arc<dyn NamespaceStore>) -> Self {
        Self { store }
    }

    /// Every folder in the store.
    pub async fn get_all_folders(&self) -> ApiResponse<Vec<Folder>> {
        let result = self.store.list_all_folders().await;
        if let Ok(folders) = &result {
            debug!(count = folders.len(), "Listed all folders");
        }
        envelope(result, FOLDERS_ERROR)
    }

    /// Every file in the store.
    pub async fn get_all_files(&self) -> ApiResponse<Vec<File>> {
        let result = self.store.list_all_files().await;
        if let Ok(files) = &result {
            debug!(count = files.len(), "Listed all files");
        }
        envelope(result, FILES_ERROR)
    }

    /// Immediate child folders and files of `parent`.
    ///
    /// At the root level only folders are returned; the file lookup is
    /// skipped entirely because files cannot live outside a folder.
    pub async fn get_children(&self, parent: &ParentRef) -> ApiResponse<FolderChildren> {
        envelope(self.fetch_children(parent).await, CHILDREN_ERROR)
    }

    /// Decodes a caller token (`"root"` or a folder id) and lists its
    /// children.
    pub async fn get_children_by_token(&self, token: &str) -> ApiResponse<FolderChildren> {
        self.get_children(&ParentRef::from_token(token)).await
    }

    async fn fetch_children(&self, parent: &ParentRef) -> AppResult<FolderChildren> {
        let folders = self.store.list_folders_by_parent(parent.folder_id()).await?;

        let files = match parent {
            ParentRef::Root => Vec::new(),
            ParentRef::Folder(id) => self.store.list_files_by_parent(id).await?,
        };

        debug!(
            parent = %parent,
            folders = folders.len(),
            files = files.len(),
            "Listed folder children"
        );

        Ok(FolderChildren { folders, files })
    }
}

fn envelope<T>(result: AppResult<T>, failure: &'static str) -> ApiResponse<T> {
    match result {
        Ok(data) => ApiResponse::ok(data),
        Err(e) => {
            error!(error = %e, "{failure}");
            ApiResponse::failure(failure)
        }
    }
}
