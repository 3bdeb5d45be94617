//! Integration tests against a live PostgreSQL.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`. Each test
//! resets the schema, so point it at a throwaway database.

use std::sync::Arc;

use foldertree_core::config::DatabaseConfig;
use foldertree_core::types::{FolderId, ParentRef};
use foldertree_database::DatabasePool;
use foldertree_database::migration;
use foldertree_database::store::{NamespaceStore, PgNamespaceStore};
use foldertree_entity::{NewFile, NewFolder};
use foldertree_service::NamespaceService;

async fn fresh_store() -> PgNamespaceStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let config = DatabaseConfig {
        url,
        ..DatabaseConfig::default()
    };
    let db = DatabasePool::connect(&config)
        .await
        .expect("Failed to connect to test database");
    migration::reset_database(db.pool())
        .await
        .expect("Failed to reset database");
    PgNamespaceStore::new(db.into_pool())
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_children_and_cascade_on_postgres() {
    let store = fresh_store().await;

    let f1 = store
        .folders()
        .create(&NewFolder::root("F1", "docs"))
        .await
        .unwrap();
    let f2 = store
        .folders()
        .create(&NewFolder::child_of(&f1, "F2", "reports"))
        .await
        .unwrap();
    let x1 = store
        .files()
        .create(&NewFile::in_folder(&f2, "X1", "q1.pdf"))
        .await
        .unwrap();
    assert_eq!(x1.size, Some(0));
    assert!(x1.created_at.is_some());

    let service = NamespaceService::new(Arc::new(store.clone()));

    let root = service.get_children(&ParentRef::Root).await.into_result().unwrap();
    assert_eq!(root.folders.len(), 1);
    assert_eq!(root.folders[0].id.as_str(), "F1");
    assert!(root.files.is_empty());

    let reports = service.get_children_by_token("F2").await.into_result().unwrap();
    assert_eq!(reports.files.len(), 1);
    assert_eq!(reports.files[0].path, "/docs/reports/q1.pdf");

    assert!(store.folders().delete(&FolderId::new("F1")).await.unwrap());

    assert!(store.list_all_folders().await.unwrap().is_empty());
    assert!(store.list_all_files().await.unwrap().is_empty());
    assert_eq!(store.folders().count().await.unwrap(), 0);
    assert_eq!(store.files().count().await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_constraints_on_postgres() {
    let store = fresh_store().await;

    let f1 = store
        .folders()
        .create(&NewFolder::root("F1", "docs"))
        .await
        .unwrap();

    let dangling = NewFolder {
        id: FolderId::new("F9"),
        name: "orphan".to_string(),
        parent_id: Some(FolderId::new("missing")),
        path: "/missing/orphan".to_string(),
    };
    let err = store.folders().create(&dangling).await.unwrap_err();
    assert!(err.is_store_unavailable());

    let negative = NewFile::in_folder(&f1, "X1", "neg.bin").with_size(-5);
    assert!(store.files().create(&negative).await.is_err());

    let blank = store.folders().create(&NewFolder::root("", "blank")).await;
    assert!(blank.unwrap_err().is_store_unavailable());

    let blank_file = NewFile::in_folder(&f1, "", "blank.txt");
    assert!(store.files().create(&blank_file).await.is_err());

    assert!(store.health_check().await.unwrap());
}
