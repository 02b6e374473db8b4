//! Business logic services for the application layer.

pub mod auth_service;
pub mod redirect_service;
pub mod shortener_service;
pub mod stats_service;

pub use auth_service::AuthService;
pub use redirect_service::{RedirectService, Resolution};
pub use shortener_service::ShortenerService;
pub use stats_service::{StatsService, StatsSummary};
