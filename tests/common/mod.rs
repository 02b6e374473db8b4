#![allow(dead_code)]

use axum_test::TestServer;
use std::path::Path;
use std::sync::Arc;
use link_registry::application::services::AuthService;
use link_registry::domain::Registry;
use link_registry::domain::entities::Entry;
use link_registry::infrastructure::persistence::{JsonFileStore, NullStore};
use link_registry::routes::app_router;
use link_registry::state::AppState;
use link_registry::utils::code_generator::RandomCodeGenerator;

pub const BASE_URL: &str = "http://sho.rt";

/// `admin:secret`
pub const GOOD_CREDENTIALS: &str = "Basic YWRtaW46c2VjcmV0";
/// `admin:wrong`
pub const WRONG_PASSWORD: &str = "Basic YWRtaW46d3Jvbmc=";
/// `intruder:secret`
pub const WRONG_USER: &str = "Basic aW50cnVkZXI6c2VjcmV0";

pub fn create_test_state() -> AppState {
    state_for(Arc::new(Registry::new(Arc::new(NullStore::new()))), AuthService::disabled())
}

pub fn create_test_state_with_auth() -> AppState {
    state_for(
        Arc::new(Registry::new(Arc::new(NullStore::new()))),
        AuthService::new(Some("admin"), Some("secret")),
    )
}

/// State backed by a JSON data file at `path`.
pub async fn create_file_state(path: &Path) -> AppState {
    let registry = Registry::load(Arc::new(JsonFileStore::new(path)))
        .await
        .unwrap();
    state_for(Arc::new(registry), AuthService::disabled())
}

fn state_for(registry: Arc<Registry>, auth: AuthService) -> AppState {
    AppState::new(registry, Arc::new(RandomCodeGenerator), auth, BASE_URL)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

pub async fn insert_entry(state: &AppState, entry: Entry) {
    state.registry.put(entry).await;
}

/// Strips [`BASE_URL`] from a short URL returned by the shorten endpoint.
pub fn code_of(short_url: &str) -> String {
    short_url
        .strip_prefix(BASE_URL)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap()
        .to_string()
}
