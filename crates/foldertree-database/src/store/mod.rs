//! The namespace store: read access to the folder/file forest.
//!
//! [`NamespaceStore`] is the seam between the query service and the
//! persistence engine. [`StoreManager`] selects the configured backend at
//! startup, the same way for every caller (server, CLI, tests).

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use foldertree_core::config::{DatabaseConfig, StoreConfig, StoreProvider};
use foldertree_core::result::AppResult;
use foldertree_core::types::FolderId;
use foldertree_entity::{File, Folder};

use crate::connection::DatabasePool;
use crate::migration;

pub use memory::MemoryNamespaceStore;
pub use postgres::PgNamespaceStore;

/// Read operations over persisted folders and files.
///
/// Implementations surface every persistence failure as
/// `ErrorKind::StoreUnavailable`. No ordering is promised.
#[async_trait]
pub trait NamespaceStore: Send + Sync + std::fmt::Debug + 'static {
    /// Every folder row.
    async fn list_all_folders(&self) -> AppResult<Vec<Folder>>;

    /// Every file row.
    async fn list_all_files(&self) -> AppResult<Vec<File>>;

    /// Folders whose parent equals `parent_id`, or root folders when `None`.
    async fn list_folders_by_parent(&self, parent_id: Option<&FolderId>)
    -> AppResult<Vec<Folder>>;

    /// Files whose parent equals `parent_id`.
    async fn list_files_by_parent(&self, parent_id: &FolderId) -> AppResult<Vec<File>>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Store manager that wraps the configured backend.
#[derive(Debug, Clone)]
pub struct StoreManager {
    inner: Arc<dyn NamespaceStore>,
}

impl StoreManager {
    /// Connect to the backend named by `store.provider`.
    ///
    /// For PostgreSQL this opens the pool and, when enabled, applies
    /// pending migrations.
    pub async fn new(store: &StoreConfig, database: &DatabaseConfig) -> AppResult<Self> {
        let inner: Arc<dyn NamespaceStore> = match store.provider {
            StoreProvider::Postgres => {
                info!("Initializing PostgreSQL namespace store");
                let pool = DatabasePool::connect(database).await?.into_pool();
                if database.run_migrations {
                    migration::run_migrations(&pool).await?;
                }
                Arc::new(PgNamespaceStore::new(pool))
            }
            StoreProvider::Memory => {
                info!("Initializing in-memory namespace store");
                Arc::new(MemoryNamespaceStore::new())
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing backend (for testing).
    pub fn from_store(store: Arc<dyn NamespaceStore>) -> Self {
        Self { inner: store }
    }

    /// A shared handle to the inner backend.
    pub fn store(&self) -> Arc<dyn NamespaceStore> {
        Arc::clone(&self.inner)
    }
}

#[async_trait]
impl NamespaceStore for StoreManager {
    async fn list_all_folders(&self) -> AppResult<Vec<Folder>> {
        self.inner.list_all_folders().await
    }

    async fn list_all_files(&self) -> AppResult<Vec<File>> {
        self.inner.list_all_files().await
    }

    async fn list_folders_by_parent(
        &self,
        parent_id: Option<&FolderId>,
    ) -> AppResult<Vec<Folder>> {
        self.inner.list_folders_by_parent(parent_id).await
    }

    async fn list_files_by_parent(&self, parent_id: &FolderId) -> AppResult<Vec<File>> {
        self.inner.list_files_by_parent(parent_id).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_provider_from_config() {
        let store = StoreConfig {
            provider: StoreProvider::Memory,
        };
        let manager = StoreManager::new(&store, &DatabaseConfig::default())
            .await
            .expect("memory store needs no connection");

        assert!(manager.health_check().await.expect("health"));
        assert!(manager.list_all_folders().await.expect("list").is_empty());
    }
}
