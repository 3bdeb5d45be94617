//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use foldertree_api::AppState;
use foldertree_core::config::AppConfig;
use foldertree_core::error::AppError;
use foldertree_core::result::AppResult;
use foldertree_core::types::FolderId;
use foldertree_database::store::{MemoryNamespaceStore, NamespaceStore, StoreManager};
use foldertree_entity::{File, Folder, NewFile, NewFolder};

/// Test application context
pub struct TestApp {
    /// The Axum app for making test requests
    pub router: Router,
    /// Backing store for seeding and direct mutation
    pub store: MemoryNamespaceStore,
}

impl TestApp {
    /// Create an app over an empty in-memory store
    pub fn new() -> Self {
        let store = MemoryNamespaceStore::new();
        let router = build(Arc::new(store.clone()));
        Self { router, store }
    }

    /// Create an app seeded with the reference tree:
    ///
    /// ```text
    /// F1 /docs
    /// └── F2 /docs/reports
    ///     └── X1 /docs/reports/q1.pdf
    /// F3 /media
    /// └── X2 /media/song.ogg
    /// ```
    pub async fn seeded() -> Self {
        let app = Self::new();
        let f1 = app.add_folder(NewFolder::root("F1", "docs")).await;
        let f2 = app
            .add_folder(NewFolder::child_of(&f1, "F2", "reports"))
            .await;
        app.add_file(NewFile::in_folder(&f2, "X1", "q1.pdf").with_size(4096))
            .await;
        let f3 = app.add_folder(NewFolder::root("F3", "media")).await;
        app.add_file(NewFile::in_folder(&f3, "X2", "song.ogg")).await;
        app
    }

    /// Insert a folder directly into the store
    pub async fn add_folder(&self, data: NewFolder) -> Folder {
        self.store
            .insert_folder(data)
            .await
            .expect("Failed to insert folder")
    }

    /// Insert a file directly into the store
    pub async fn add_file(&self, data: NewFile) -> File {
        self.store
            .insert_file(data)
            .await
            .expect("Failed to insert file")
    }

    /// Make a GET request to the test app
    pub async fn get(&self, path: &str) -> TestResponse {
        request(&self.router, "GET", path).await
    }
}

/// App whose store fails every call
pub fn unavailable_app() -> Router {
    build(Arc::new(UnavailableStore))
}

fn build(store: Arc<dyn NamespaceStore>) -> Router {
    let config = AppConfig::default();
    let cors = config.server.cors.clone();
    let state = AppState::new(config, StoreManager::from_store(store));
    foldertree_api::build_app(state, &cors)
}

/// Make an HTTP request against a router
pub async fn request(router: &Router, method: &str, path: &str) -> TestResponse {
    let req = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read body");
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    TestResponse { status, body }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` member of a success envelope
    pub fn data(&self) -> &Value {
        assert_eq!(
            self.body["success"], true,
            "expected success envelope: {:?}",
            self.body
        );
        &self.body["data"]
    }

    /// Sorted `id` values of a JSON array
    pub fn ids(items: &Value) -> Vec<String> {
        let mut ids: Vec<String> = items
            .as_array()
            .expect("expected JSON array")
            .iter()
            .map(|v| v["id"].as_str().expect("id").to_string())
            .collect();
        ids.sort();
        ids
    }
}

/// Store that reports every operation as an outage.
#[derive(Debug)]
struct UnavailableStore;

#[async_trait]
impl NamespaceStore for UnavailableStore {
    async fn list_all_folders(&self) -> AppResult<Vec<Folder>> {
        Err(AppError::store_unavailable("connection refused"))
    }

    async fn list_all_files(&self) -> AppResult<Vec<File>> {
        Err(AppError::store_unavailable("connection refused"))
    }

    async fn list_folders_by_parent(&self, _parent_id: Option<&FolderId>) -> AppResult<Vec<Folder>> {
        Err(AppError::store_unavailable("connection refused"))
    }

    async fn list_files_by_parent(&self, _parent_id: &FolderId) -> AppResult<Vec<File>> {
        Err(AppError::store_unavailable("connection refused"))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Err(AppError::store_unavailable("connection refused"))
    }
}
