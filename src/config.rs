//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8088`). When unset, `SIRUS_PORT`
//!   is honoured as `0.0.0.0:$SIRUS_PORT`.
//! - `BASE_URL` - Prefix for returned short URLs (default: `http://localhost:8088`)
//! - `DATA_FILE` - JSON data file (default: `data.json`); empty disables persistence
//! - `AUTH_USER` / `SIRUS_USER` - Basic-auth user
//! - `AUTH_PASSWORD` / `SIRUS_PASS` - Basic-auth password; auth is on when non-empty
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

const DEFAULT_PORT: &str = "8088";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Prefix joined with `/` and the code to form the short URL.
    pub base_url: String,
    /// `None` runs without persistence.
    pub data_file: Option<String>,
    pub auth_user: Option<String>,
    pub auth_password: Option<String>,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SIRUS_PORT` is set but is not a port number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = Self::load_listen_addr().context("Failed to load listen address")?;

        let base_url = env::var("BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| format!("http://localhost:{DEFAULT_PORT}"));

        let data_file = match env::var("DATA_FILE") {
            Ok(v) if v.trim().is_empty() => None,
            Ok(v) => Some(v),
            Err(_) => Some("data.json".to_string()),
        };

        let auth_user = first_set(&["AUTH_USER", "SIRUS_USER"]);
        let auth_password = first_set(&["AUTH_PASSWORD", "SIRUS_PASS"]);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            base_url,
            data_file,
            auth_user,
            auth_password,
            log_level,
            log_format,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN`
    /// 2. `0.0.0.0:$SIRUS_PORT`
    /// 3. `0.0.0.0:8088`
    fn load_listen_addr() -> Result<String> {
        if let Ok(addr) = env::var("LISTEN") {
            return Ok(addr);
        }

        match env::var("SIRUS_PORT") {
            Ok(port) if !port.is_empty() => {
                let port: u16 = port
                    .parse()
                    .with_context(|| format!("SIRUS_PORT must be a port number, got '{port}'"))?;
                Ok(format!("0.0.0.0:{port}"))
            }
            _ => Ok(format!("0.0.0.0:{DEFAULT_PORT}")),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an HTTP(S) URL
    /// - `log_format` is not `text` or `json`
    /// - a password is configured without a user
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.is_auth_enabled() && self.auth_user.as_deref().is_none_or(str::is_empty) {
            anyhow::bail!("AUTH_USER must be set when AUTH_PASSWORD is set");
        }

        Ok(())
    }

    /// Returns whether basic auth is enabled.
    pub fn is_auth_enabled(&self) -> bool {
        self.auth_password.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);

        match &self.data_file {
            Some(path) => tracing::info!("  Data file: {}", path),
            None => tracing::info!("  Data file: disabled (memory only)"),
        }

        if self.is_auth_enabled() {
            tracing::info!(
                "  Basic auth: enabled for user '{}' (password: ***)",
                self.auth_user.as_deref().unwrap_or_default()
            );
        } else {
            tracing::info!("  Basic auth: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn first_set(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| env::var(name).ok())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if parsing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
