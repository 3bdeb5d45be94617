//! Integration tests for the namespace listing endpoints.

mod helpers;

use axum::http::StatusCode;

use foldertree_core::types::FolderId;
use foldertree_entity::{NewFile, NewFolder};
use helpers::{TestApp, TestResponse};

#[tokio::test]
async fn test_root_children_are_top_level_folders_only() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/v1/folders/root/children").await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(TestResponse::ids(&data["folders"]), vec!["F1", "F3"]);
    assert_eq!(data["files"], serde_json::json!([]));
}

#[tokio::test]
async fn test_folder_children_walk_one_level() {
    let app = TestApp::seeded().await;

    let f1 = app.get("/api/v1/folders/F1/children").await;
    assert_eq!(f1.status, StatusCode::OK);
    assert_eq!(TestResponse::ids(&f1.data()["folders"]), vec!["F2"]);
    assert!(f1.data()["files"].as_array().unwrap().is_empty());

    let f2 = app.get("/api/v1/folders/F2/children").await;
    assert!(f2.data()["folders"].as_array().unwrap().is_empty());
    let files = &f2.data()["files"];
    assert_eq!(TestResponse::ids(files), vec!["X1"]);
    assert_eq!(files[0]["parentId"], "F2");
    assert_eq!(files[0]["path"], "/docs/reports/q1.pdf");
    assert_eq!(files[0]["size"], 4096);
}

#[tokio::test]
async fn test_unknown_parent_is_empty_success() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/v1/folders/no-such-folder/children").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        serde_json::json!({ "success": true, "data": { "folders": [], "files": [] } })
    );
}

#[tokio::test]
async fn test_list_all_folders_and_files() {
    let app = TestApp::seeded().await;

    let folders = app.get("/api/v1/folders").await;
    assert_eq!(folders.status, StatusCode::OK);
    assert_eq!(TestResponse::ids(folders.data()), vec!["F1", "F2", "F3"]);

    let roots: Vec<&serde_json::Value> = folders
        .data()
        .as_array()
        .unwrap()
        .iter()
        .filter(|f| f["parentId"].is_null())
        .collect();
    assert_eq!(roots.len(), 2);

    let files = app.get("/api/v1/folders/files").await;
    assert_eq!(files.status, StatusCode::OK);
    assert_eq!(TestResponse::ids(files.data()), vec!["X1", "X2"]);
}

#[tokio::test]
async fn test_empty_namespace() {
    let app = TestApp::new();

    let folders = app.get("/api/v1/folders").await;
    assert_eq!(folders.body, serde_json::json!({ "success": true, "data": [] }));

    let root = app.get("/api/v1/folders/root/children").await;
    assert_eq!(
        root.body,
        serde_json::json!({ "success": true, "data": { "folders": [], "files": [] } })
    );
}

#[tokio::test]
async fn test_folder_delete_cascades_to_files() {
    let app = TestApp::seeded().await;
    let f4 = app.add_folder(NewFolder::root("F4", "scratch")).await;
    app.add_file(NewFile::in_folder(&f4, "X3", "tmp.txt")).await;

    assert!(app.store.delete_folder(&FolderId::new("F1")).await.unwrap());

    let folders = app.get("/api/v1/folders").await;
    assert_eq!(TestResponse::ids(folders.data()), vec!["F3", "F4"]);

    let files = app.get("/api/v1/folders/files").await;
    assert_eq!(TestResponse::ids(files.data()), vec!["X2", "X3"]);

    let orphan = app.get("/api/v1/folders/F2/children").await;
    assert!(orphan.data()["files"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_store_outage_returns_failure_envelope() {
    let router = helpers::unavailable_app();

    let folders = helpers::request(&router, "GET", "/api/v1/folders").await;
    assert_eq!(folders.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        folders.body,
        serde_json::json!({ "success": false, "error": "Failed to fetch folders" })
    );

    let files = helpers::request(&router, "GET", "/api/v1/folders/files").await;
    assert_eq!(files.body["error"], "Failed to fetch files");

    let children = helpers::request(&router, "GET", "/api/v1/folders/root/children").await;
    assert_eq!(children.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(children.body["success"], false);
    assert_eq!(children.body["error"], "Failed to fetch folder children");
    assert!(children.body.get("data").is_none());
}

#[tokio::test]
async fn test_overlong_parent_id_is_rejected() {
    let app = TestApp::seeded().await;
    let path = format!("/api/v1/folders/{}/children", "a".repeat(37));

    let response = app.get(&path).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_health_reports_store_state() {
    let app = TestApp::new();
    let ok = app.get("/api/v1/health").await;
    assert_eq!(ok.status, StatusCode::OK);
    assert_eq!(ok.data()["store"], "connected");

    let down = helpers::request(&helpers::unavailable_app(), "GET", "/api/v1/health").await;
    assert_eq!(down.status, StatusCode::OK);
    assert_eq!(down.data()["store"], "unavailable");
}

#[tokio::test]
async fn test_control_character_parent_id_is_rejected() {
    let app = TestApp::seeded().await;

    for path in [
        "/api/v1/folders/%00/children",
        "/api/v1/folders/F1%0A/children",
    ] {
        let response = app.get(path).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_undecodable_parent_id_gets_json_error() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/v1/folders/%FF/children").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(
        response.body["message"]
            .as_str()
            .is_some_and(|m| !m.is_empty())
    );
}
