//! # Link Registry
//!
//! A small URL shortener built with Axum, keeping every link in memory and
//! mirroring the registry to a JSON file.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entries, the registry and the storage trait
//! - **Application Layer** ([`application`]) - Shortening, redirect, stats and auth services
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file and in-memory stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Random or custom short codes, deduplicated per URL
//! - `exact` and `sub` links; `sub` links forward the path remainder
//! - Redirect and shorten counters
//! - Optional HTTP Basic authentication
//!
//! ## Quick Start
//!
//! ```bash
//! export DATA_FILE=data.json
//! cargo run
//!
//! curl -d '{"url":"https://github.com/meain","code":"gh","mode":"sub"}' localhost:8088
//! curl -i localhost:8088/gh/dotfiles
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AuthService, RedirectService, ShortenerService, StatsService,
    };
    pub use crate::domain::entities::{Entry, Mode};
    pub use crate::domain::repositories::EntryStore;
    pub use crate::domain::{Registry, RegistryTxn};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{JsonFileStore, NullStore};
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
}
