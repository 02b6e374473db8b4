//! API route configuration.
//!
//! Mounted under `/api`; guarded by [`crate::api::middleware::auth`] when
//! credentials are configured.

use crate::api::handlers::{stats_handler, stats_list_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Statistics routes.
///
/// # Endpoints
///
/// - `GET /stats`         - Every entry with totals
/// - `GET /stats/{code}`  - Counters of a specific code
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats_list_handler))
        .route("/stats/{code}", get(stats_handler))
}
