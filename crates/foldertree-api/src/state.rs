//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use foldertree_core::config::AppConfig;
use foldertree_database::store::StoreManager;
use foldertree_service::namespace::NamespaceService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Namespace store backend
    pub store: StoreManager,
    /// Namespace query service
    pub namespace_service: Arc<NamespaceService>,
}

impl AppState {
    /// Wire the service on top of an already-connected store.
    pub fn new(config: AppConfig, store: StoreManager) -> Self {
        let namespace_service = Arc::new(NamespaceService::new(store.store()));
        Self {
            config: Arc::new(config),
            store,
            namespace_service,
        }
    }
}
