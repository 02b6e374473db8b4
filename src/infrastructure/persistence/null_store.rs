//! No-op store for running without persistence.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::Entry;
use crate::domain::errors::StorageError;
use crate::domain::repositories::EntryStore;

/// A store that keeps nothing.
///
/// Loads are always empty and saves succeed without writing. Used when
/// `DATA_FILE` is empty and in tests.
pub struct NullStore;

impl NullStore {
    /// Creates a new NullStore instance.
    pub fn new() -> Self {
        debug!("Using NullStore (persistence disabled)");
        Self
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntryStore for NullStore {
    async fn load(&self) -> Result<HashMap<String, Entry>, StorageError> {
        Ok(HashMap::new())
    }

    async fn save(&self, _entries: &HashMap<String, Entry>) -> Result<(), StorageError> {
        Ok(())
    }

    fn describe(&self) -> String {
        "memory only (not persisted)".to_string()
    }
}
