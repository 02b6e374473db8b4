mod common;

use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use link_registry::domain::Registry;
use link_registry::domain::entities::Mode;
use link_registry::infrastructure::persistence::JsonFileStore;

#[tokio::test]
async fn test_links_survive_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");

    {
        let server = common::test_server(common::create_file_state(&path).await);
        server
            .post("/")
            .json(&json!({ "url": "https://github.com/meain", "code": "g", "mode": "sub" }))
            .await;
        server.get("/g/dotfiles").await;
    }

    let server = common::test_server(common::create_file_state(&path).await);

    let response = server.get("/g/blog").await;
    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://github.com/meain/blog");

    let body: Value = server.get("/api/stats/g").await.json();
    assert_eq!(body["redirect_count"], 2);
    assert_eq!(body["shorten_count"], 1);

    // The reverse map was rebuilt: shortening again reuses the code.
    let again = server
        .post("/")
        .json(&json!({ "url": "https://github.com/meain", "mode": "sub" }))
        .await;
    assert_eq!(again.text(), "http://sho.rt/g");
}

#[tokio::test]
async fn test_file_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    let server = common::test_server(common::create_file_state(&path).await);

    server
        .post("/")
        .json(&json!({ "url": "https://domain.tld", "code": "d" }))
        .await;

    let saved: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(
        saved,
        json!({
            "d": {
                "url": "https://domain.tld",
                "code": "d",
                "mode": "exact",
                "redirectCount": 0,
                "shortenCount": 1
            }
        })
    );
    assert!(!dir.path().join("data.json.tmp").exists());
}

#[tokio::test]
async fn test_loads_legacy_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(
        &path,
        r#"{
            "gh": {"Url": "https://github.com", "Code": "gh", "Mode": "sub", "Count": 7, "Scount": 2},
            "old": {"Url": "https://github.com", "Code": "old", "Mode": "sub", "Count": 1, "Scount": 5}
        }"#,
    )
    .unwrap();

    let registry = Registry::load(Arc::new(JsonFileStore::new(&path)))
        .await
        .unwrap();

    let gh = registry.get_by_code("gh").await.unwrap();
    assert_eq!(gh.mode, Mode::Sub);
    assert_eq!(gh.redirect_count, 7);
    assert_eq!(gh.shorten_count, 2);

    let preferred = registry.get_by_url("https://github.com").await.unwrap();
    assert_eq!(preferred.code, "old");
}

#[tokio::test]
async fn test_corrupt_file_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = Registry::load(Arc::new(JsonFileStore::new(&path))).await;

    assert!(result.is_err());
}
