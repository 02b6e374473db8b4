mod common;

use axum::http::header;
use link_registry::domain::entities::{Entry, Mode};
use serde_json::{Value, json};

#[tokio::test]
async fn test_shorten_random_code() {
    let state = common::create_test_state();
    let server = common::test_server(state.clone());

    let response = server
        .post("/")
        .json(&json!({ "url": "https://github.com/meain" }))
        .await;

    assert_eq!(response.status_code(), 200);
    let code = common::code_of(&response.text());
    assert_eq!(code.len(), 7);

    let entry = state.registry.get_by_code(&code).await.unwrap();
    assert_eq!(entry.url, "https://github.com/meain");
    assert_eq!(entry.mode, Mode::Exact);
    assert_eq!(entry.shorten_count, 1);
    assert_eq!(entry.redirect_count, 0);
}

#[tokio::test]
async fn test_shorten_custom_code() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .post("/")
        .json(&json!({ "url": "https://github.com/meain", "code": "gh", "mode": "sub" }))
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "http://sho.rt/gh");
}

#[tokio::test]
async fn test_shorten_without_content_type() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .post("/")
        .text(r#"{"url":"https://domain.tld","code":"plain"}"#)
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "http://sho.rt/plain");
}

#[tokio::test]
async fn test_shorten_same_url_returns_same_code() {
    let state = common::create_test_state();
    let server = common::test_server(state.clone());

    let first = server
        .post("/")
        .json(&json!({ "url": "https://domain.tld/page" }))
        .await
        .text();
    let second = server
        .post("/")
        .json(&json!({ "url": "https://domain.tld/page" }))
        .await
        .text();

    assert_eq!(first, second);

    let entry = state
        .registry
        .get_by_code(&common::code_of(&first))
        .await
        .unwrap();
    assert_eq!(entry.shorten_count, 2);
}

#[tokio::test]
async fn test_shorten_code_taken_by_other_url() {
    let state = common::create_test_state();
    common::insert_entry(&state, Entry::new("https://one.tld", "taken", Mode::Exact)).await;
    let server = common::test_server(state);

    let response = server
        .post("/")
        .json(&json!({ "url": "https://two.tld", "code": "taken" }))
        .await;

    assert_eq!(response.status_code(), 409);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "conflict");
    assert_eq!(body["error"]["details"]["reason"], "code_conflict");
}

#[tokio::test]
async fn test_shorten_mode_conflict() {
    let state = common::create_test_state();
    common::insert_entry(&state, Entry::new("https://one.tld", "one", Mode::Sub)).await;
    let server = common::test_server(state);

    let response = server
        .post("/")
        .json(&json!({ "url": "https://one.tld" }))
        .await;

    assert_eq!(response.status_code(), 409);
    let body: Value = response.json();
    assert_eq!(body["error"]["details"]["reason"], "mode_conflict");
    assert_eq!(body["error"]["details"]["existing_mode"], "sub");
    assert_eq!(body["error"]["details"]["requested_mode"], "exact");
}

#[tokio::test]
async fn test_shorten_rejects_unparsable_body() {
    let server = common::test_server(common::create_test_state());

    let response = server.post("/").text("url=https://domain.tld").await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Unable to parse request body");
}

#[tokio::test]
async fn test_shorten_rejects_invalid_input() {
    let server = common::test_server(common::create_test_state());

    for payload in [
        json!({ "url": "" }),
        json!({ "url": "ftp://domain.tld" }),
        json!({ "url": "domain.tld" }),
        json!({ "url": "https://domain.tld", "code": "has space" }),
        json!({ "url": "https://domain.tld", "code": "api" }),
        json!({ "url": "https://domain.tld", "mode": "regex" }),
    ] {
        let response = server.post("/").json(&payload).await;
        assert_eq!(response.status_code(), 400, "payload: {payload}");
    }
}

#[tokio::test]
async fn test_shorten_response_is_plain_text() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .post("/")
        .json(&json!({ "url": "https://domain.tld", "code": "txt" }))
        .await;

    let content_type = response.header(header::CONTENT_TYPE);
    assert!(content_type.to_str().unwrap().starts_with("text/plain"));
}
