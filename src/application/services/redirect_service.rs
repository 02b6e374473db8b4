//! Redirect path resolution.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::Registry;
use crate::domain::errors::ResolveError;

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Where the client should be sent.
    pub target: String,
    /// The code that matched the first path segment.
    pub code: String,
}

/// Resolves request paths to target urls and counts redirects.
pub struct RedirectService {
    registry: Arc<Registry>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Resolves `path` (without the leading `/`) to a target url.
    ///
    /// The path is split on its first `/` into a code and an optional
    /// remainder. A remainder is appended to the entry url with a `/`
    /// regardless of the entry's mode. On success the code's redirect
    /// counter is bumped within the same registry transaction.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] if the code is unknown and
    /// [`ResolveError::InvalidTarget`] if the joined target holds control
    /// characters; in both cases the registry is left untouched.
    pub async fn resolve(&self, path: &str) -> Result<Resolution, ResolveError> {
        let (code, remainder) = split_path(path);

        let mut txn = self.registry.lock().await;

        let Some(target) = txn.get_by_code(code).map(|entry| entry.target(remainder)) else {
            debug!(path = %path, "No entry for redirect path");
            return Err(ResolveError::NotFound {
                code: code.to_string(),
            });
        };

        if !is_header_safe(&target) {
            debug!(path = %path, "Redirect target is not header-safe");
            return Err(ResolveError::InvalidTarget {
                code: code.to_string(),
            });
        }

        txn.bump_redirect_count(code).await;
        info!(path = %path, target = %target, "Redirecting");

        Ok(Resolution {
            target,
            code: code.to_string(),
        })
    }
}

/// Splits a request path into its code and the optional remainder.
pub fn split_path(path: &str) -> (&str, Option<&str>) {
    match path.split_once('/') {
        Some((code, rest)) => (code, Some(rest)),
        None => (path, None),
    }
}

/// Matches the byte set accepted in an HTTP header value.
fn is_header_safe(target: &str) -> bool {
    target
        .bytes()
        .all(|b| b == b'\t' || (b >= 0x20 && b != 0x7f))
}
