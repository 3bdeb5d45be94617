//! PostgreSQL-backed namespace store.

use async_trait::async_trait;
use sqlx::PgPool;

use foldertree_core::result::AppResult;
use foldertree_core::types::FolderId;
use foldertree_entity::{File, Folder};

use super::NamespaceStore;
use crate::connection;
use crate::repositories::{FileRepository, FolderRepository};

/// Namespace store over the `folders` and `files` tables.
///
/// Each read is a single SELECT; referential integrity and cascade
/// deletion are enforced by the schema.
#[derive(Debug, Clone)]
pub struct PgNamespaceStore {
    pool: PgPool,
    folders: FolderRepository,
    files: FileRepository,
}

impl PgNamespaceStore {
    /// Create a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            folders: FolderRepository::new(pool.clone()),
            files: FileRepository::new(pool.clone()),
            pool,
        }
    }

    /// Folder repository, for writers.
    pub fn folders(&self) -> &FolderRepository {
        &self.folders
    }

    /// File repository, for writers.
    pub fn files(&self) -> &FileRepository {
        &self.files
    }
}

#[async_trait]
impl NamespaceStore for PgNamespaceStore {
    async fn list_all_folders(&self) -> AppResult<Vec<Folder>> {
        self.folders.find_all().await
    }

    async fn list_all_files(&self) -> AppResult<Vec<File>> {
        self.files.find_all().await
    }

    async fn list_folders_by_parent(
        &self,
        parent_id: Option<&FolderId>,
    ) -> AppResult<Vec<Folder>> {
        match parent_id {
            Some(id) => self.folders.find_children(id).await,
            None => self.folders.find_roots().await,
        }
    }

    async fn list_files_by_parent(&self, parent_id: &FolderId) -> AppResult<Vec<File>> {
        self.files.find_by_parent(parent_id).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        connection::ping(&self.pool).await
    }
}
