//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, RedirectService, ShortenerService, StatsService};
use crate::domain::Registry;
use crate::utils::code_generator::CodeGenerator;

#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService>,
    pub redirect_service: Arc<RedirectService>,
    pub stats_service: Arc<StatsService>,
    pub auth_service: Arc<AuthService>,
    pub registry: Arc<Registry>,
    /// Prefix for short URLs, without a trailing slash.
    pub base_url: Arc<str>,
}

impl AppState {
    /// Wires every service around one registry.
    pub fn new(
        registry: Arc<Registry>,
        generator: Arc<dyn CodeGenerator>,
        auth_service: AuthService,
        base_url: &str,
    ) -> Self {
        Self {
            shortener_service: Arc::new(ShortenerService::new(registry.clone(), generator)),
            redirect_service: Arc::new(RedirectService::new(registry.clone())),
            stats_service: Arc::new(StatsService::new(registry.clone())),
            auth_service: Arc::new(auth_service),
            registry,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
