//! Storage contract for persisting registry entries.

use std::collections::HashMap;

use crate::domain::entities::Entry;
use crate::domain::errors::StorageError;
use async_trait::async_trait;

/// Backing store for the forward map (code → entry).
///
/// The reverse map is never stored; the registry rebuilds it from the
/// loaded entries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileStore`] - JSON file on disk
/// - [`crate::infrastructure::persistence::NullStore`] - In-memory only, saves are dropped
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Loads every persisted entry keyed by code.
    ///
    /// Missing or empty storage is not an error and yields an empty map.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the storage exists but cannot be read or
    /// parsed.
    async fn load(&self) -> Result<HashMap<String, Entry>, StorageError>;

    /// Replaces the persisted state with `entries`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] on write or serialization failure.
    async fn save(&self, entries: &HashMap<String, Entry>) -> Result<(), StorageError>;

    /// Short human-readable description used in logs and health output.
    fn describe(&self) -> String;
}
