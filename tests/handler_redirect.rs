mod common;

use link_registry::domain::entities::{Entry, Mode};
use serde_json::Value;

#[tokio::test]
async fn test_redirect_exact() {
    let state = common::create_test_state();
    common::insert_entry(&state, Entry::new("https://domain.tld/target", "ex", Mode::Exact)).await;
    let server = common::test_server(state);

    let response = server.get("/ex").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://domain.tld/target");
}

#[tokio::test]
async fn test_redirect_sub_appends_remainder() {
    let state = common::create_test_state();
    common::insert_entry(&state, Entry::new("https://github.com/meain", "g", Mode::Sub)).await;
    let server = common::test_server(state);

    let response = server.get("/g/dotfiles/tree/master").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(
        response.header("location"),
        "https://github.com/meain/dotfiles/tree/master"
    );
}

#[tokio::test]
async fn test_redirect_exact_still_appends_remainder() {
    let state = common::create_test_state();
    common::insert_entry(&state, Entry::new("https://domain.tld", "ex", Mode::Exact)).await;
    let server = common::test_server(state);

    let response = server.get("/ex/more").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://domain.tld/more");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::test_server(common::create_test_state());

    let response = server.get("/nonexistent").await;

    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_counts_matched_code() {
    let state = common::create_test_state();
    common::insert_entry(&state, Entry::new("https://github.com/meain", "g", Mode::Sub)).await;
    let server = common::test_server(state.clone());

    server.get("/g").await;
    server.get("/g/a").await;
    server.get("/g/a/b").await;

    let entry = state.registry.get_by_code("g").await.unwrap();
    assert_eq!(entry.redirect_count, 3);
    assert_eq!(entry.shorten_count, 1);
}

#[tokio::test]
async fn test_shorten_then_follow() {
    let server = common::test_server(common::create_test_state());

    let short_url = server
        .post("/")
        .json(&serde_json::json!({ "url": "https://domain.tld/docs", "mode": "sub" }))
        .await
        .text();
    let code = common::code_of(&short_url);

    let response = server.get(&format!("/{code}/intro")).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://domain.tld/docs/intro");
}

#[tokio::test]
async fn test_redirect_control_characters_rejected_uncounted() {
    let state = common::create_test_state();
    common::insert_entry(&state, Entry::new("https://domain.tld", "g", Mode::Sub)).await;
    let server = common::test_server(state.clone());

    let response = server.get("/g/a%0Ab").await;

    assert_eq!(response.status_code(), 400);
    let entry = state.registry.get_by_code("g").await.unwrap();
    assert_eq!(entry.redirect_count, 0);
}
