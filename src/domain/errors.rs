//! Error types raised by the registry and the engines built on it.

use crate::domain::entities::Mode;

/// Reasons a shorten request cannot be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortenError {
    /// The requested custom code is bound to another url, or to the same url
    /// under a different mode.
    #[error("code '{code}' is already mapped to another item")]
    CodeConflict { code: String },

    /// The url is already shortened under a different mode and no explicit
    /// code was requested.
    #[error("url '{url}' is already shortened in {existing} mode")]
    ModeConflict {
        url: String,
        existing: Mode,
        requested: Mode,
    },

    #[error("url must not be empty")]
    EmptyUrl,

    /// Every generated candidate collided with an existing code.
    #[error("no free code found after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },
}

/// Reasons a redirect path cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no entry for code '{code}'")]
    NotFound { code: String },

    /// The joined target cannot be sent as a `Location` header.
    #[error("target for code '{code}' contains control characters")]
    InvalidTarget { code: String },
}

/// Failures of the storage collaborator.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
