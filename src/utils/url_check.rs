//! Target URL validation.
//!
//! Targets are stored exactly as submitted so that the reverse lookup and
//! sub-path joins see the caller's spelling. This module only checks that
//! the string is an absolute HTTP(S) URL.

use url::Url;

/// Errors that can occur while checking a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlCheckError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Checks that `input` is an absolute `http` or `https` URL with a host.
///
/// Rejects protocols such as `javascript:`, `data:` and `file:`.
///
/// # Errors
///
/// Returns [`UrlCheckError`] describing the first violated rule.
pub fn check_target_url(input: &str) -> Result<(), UrlCheckError> {
    if input.trim().is_empty() {
        return Err(UrlCheckError::Empty);
    }

    let url = Url::parse(input).map_err(|e| UrlCheckError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlCheckError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlCheckError::InvalidFormat("missing host".to_string()));
    }

    Ok(())
}
