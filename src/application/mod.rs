//! Application layer services implementing business logic.
//!
//! Services wrap the shared [`crate::domain::Registry`] and give HTTP handlers
//! and the admin CLI a small API.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Code generation and reuse policy
//! - [`services::redirect_service::RedirectService`] - Path resolution and redirect counting
//! - [`services::stats_service::StatsService`] - Counter read-out
//! - [`services::auth_service::AuthService`] - Basic-auth credential check

pub mod services;
