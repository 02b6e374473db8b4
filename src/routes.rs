//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                  - Banner
//! - `POST /`                  - Shorten a URL
//! - `GET  /{code}[/{rest}]`   - Short link redirect
//! - `GET  /api/stats[/{code}]` - Counters
//! - `GET  /health`            - Health check (always public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - HTTP Basic, when a password is configured

use crate::api;
use crate::api::handlers::{health_handler, index_handler, redirect_handler, shorten_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/", get(index_handler).post(shorten_handler))
        .route("/{*path}", get(redirect_handler))
        .nest("/api", api::routes::protected_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .merge(protected)
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}
