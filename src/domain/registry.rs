//! In-memory bidirectional index of short codes and target urls.
//!
//! The registry owns two maps kept in lockstep:
//!
//! - forward: code → [`Entry`]
//! - reverse: url → code
//!
//! Both sit behind a single async mutex. Every mutation goes through a
//! [`RegistryTxn`] and is flushed to the [`EntryStore`] before the lock is
//! released. Callers that need check-then-write sequences (the shortener)
//! hold one transaction for the whole sequence.
//!
//! # Persistence failures
//!
//! A failed save is logged and remembered, and the registry keeps serving
//! from memory. [`Registry::persistence_status`] reports the last failure
//! until a later save succeeds.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

use crate::domain::entities::Entry;
use crate::domain::errors::StorageError;
use crate::domain::repositories::EntryStore;

#[derive(Debug, Default)]
struct Index {
    by_code: HashMap<String, Entry>,
    by_url: HashMap<String, String>,
    persist_failure: Option<String>,
}

impl Index {
    /// Builds an index from persisted entries, rebuilding the reverse map.
    ///
    /// When several entries share a url the reverse map points at the one
    /// with the highest shorten count, ties going to the smallest code.
    fn from_entries(entries: HashMap<String, Entry>) -> Self {
        let mut by_code = HashMap::with_capacity(entries.len());

        for (key, mut entry) in entries {
            if key.is_empty() || entry.url.is_empty() {
                warn!(code = %key, "Skipping stored entry with empty code or url");
                continue;
            }
            if entry.code != key {
                warn!(
                    key = %key,
                    code = %entry.code,
                    "Stored entry code differs from its key, using the key"
                );
                entry.code = key.clone();
            }
            by_code.insert(key, entry);
        }

        let mut by_url: HashMap<String, String> = HashMap::with_capacity(by_code.len());
        for entry in by_code.values() {
            let replace = match by_url.get(&entry.url) {
                Some(current) => by_code
                    .get(current)
                    .is_none_or(|current| preferred_for_url(entry, current)),
                None => true,
            };
            if replace {
                by_url.insert(entry.url.clone(), entry.code.clone());
            }
        }

        Self {
            by_code,
            by_url,
            persist_failure: None,
        }
    }
}

fn preferred_for_url(candidate: &Entry, current: &Entry) -> bool {
    (candidate.shorten_count, Reverse(&candidate.code))
        > (current.shorten_count, Reverse(&current.code))
}

/// Process-wide registry of short codes.
///
/// Cheap to share behind an [`Arc`]; all access is serialized internally.
pub struct Registry {
    index: Mutex<Index>,
    store: Arc<dyn EntryStore>,
}

impl Registry {
    /// Creates an empty registry that persists into `store`.
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self {
            index: Mutex::new(Index::default()),
            store,
        }
    }

    /// Creates a registry populated from `store`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store exists but cannot be read.
    pub async fn load(store: Arc<dyn EntryStore>) -> Result<Self, StorageError> {
        let entries = store.load().await?;
        let index = Index::from_entries(entries);

        if index.by_code.is_empty() {
            info!("No previous data available, starting with an empty registry");
        } else {
            info!(
                entries = index.by_code.len(),
                urls = index.by_url.len(),
                "Loaded registry"
            );
        }

        Ok(Self {
            index: Mutex::new(index),
            store,
        })
    }

    /// Acquires exclusive access to the registry.
    ///
    /// The returned transaction holds the lock until dropped.
    pub async fn lock(&self) -> RegistryTxn<'_> {
        RegistryTxn {
            index: self.index.lock().await,
            store: self.store.as_ref(),
        }
    }

    pub async fn get_by_code(&self, code: &str) -> Option<Entry> {
        self.lock().await.get_by_code(code).cloned()
    }

    pub async fn get_by_url(&self, url: &str) -> Option<Entry> {
        self.lock().await.get_by_url(url).cloned()
    }

    pub async fn put(&self, entry: Entry) {
        self.lock().await.put(entry).await
    }

    pub async fn bump_shorten_count(&self, code: &str) -> Option<Entry> {
        self.lock().await.bump_shorten_count(code).await
    }

    pub async fn bump_redirect_count(&self, code: &str) -> Option<Entry> {
        self.lock().await.bump_redirect_count(code).await
    }

    /// Number of codes currently registered.
    pub async fn len(&self) -> usize {
        self.index.lock().await.by_code.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Copies every entry, sorted by code.
    pub async fn snapshot(&self) -> Vec<Entry> {
        let index = self.index.lock().await;
        let mut entries: Vec<Entry> = index.by_code.values().cloned().collect();
        entries.sort_by(|a, b| a.code.cmp(&b.code));
        entries
    }

    /// Returns the last save failure, or `None` if storage is in sync.
    pub async fn persistence_status(&self) -> Option<String> {
        self.index.lock().await.persist_failure.clone()
    }

    /// Describes the backing store.
    pub fn store_description(&self) -> String {
        self.store.describe()
    }
}

/// Exclusive handle on the registry.
///
/// Reads borrow from the locked maps; writes update both maps and then
/// persist the forward map.
pub struct RegistryTxn<'a> {
    index: MutexGuard<'a, Index>,
    store: &'a dyn EntryStore,
}

impl RegistryTxn<'_> {
    pub fn contains(&self, code: &str) -> bool {
        self.index.by_code.contains_key(code)
    }

    pub fn get_by_code(&self, code: &str) -> Option<&Entry> {
        self.index.by_code.get(code)
    }

    /// Looks up the entry the reverse map holds for `url`.
    ///
    /// A reverse mapping that points at a missing code is logged and
    /// treated as absent.
    pub fn get_by_url(&self, url: &str) -> Option<&Entry> {
        let code = self.index.by_url.get(url)?;
        let entry = self.index.by_code.get(code);
        if entry.is_none() {
            warn!(
                url = %url,
                code = %code,
                "Reverse map references a missing code, ignoring it"
            );
        }
        entry
    }

    /// Inserts or overwrites the entry under its code and points the
    /// reverse map for its url at it.
    pub async fn put(&mut self, entry: Entry) {
        let index = &mut *self.index;

        if let Some(previous) = index.by_code.get(&entry.code)
            && previous.url != entry.url
            && index.by_url.get(&previous.url) == Some(&entry.code)
        {
            let stale = previous.url.clone();
            index.by_url.remove(&stale);
        }

        index.by_url.insert(entry.url.clone(), entry.code.clone());
        index.by_code.insert(entry.code.clone(), entry);

        self.persist().await;
    }

    /// Increments the shorten counter of `code` and returns the updated
    /// entry. Absent codes are a logged no-op.
    pub async fn bump_shorten_count(&mut self, code: &str) -> Option<Entry> {
        self.bump(code, |entry| &mut entry.shorten_count).await
    }

    /// Increments the redirect counter of `code` and returns the updated
    /// entry. Absent codes are a logged no-op.
    pub async fn bump_redirect_count(&mut self, code: &str) -> Option<Entry> {
        self.bump(code, |entry| &mut entry.redirect_count).await
    }

    async fn bump(
        &mut self,
        code: &str,
        counter: impl FnOnce(&mut Entry) -> &mut u64,
    ) -> Option<Entry> {
        let Some(entry) = self.index.by_code.get_mut(code) else {
            warn!(code = %code, "Counter bump for unknown code ignored");
            return None;
        };

        let count = counter(entry);
        *count = count.saturating_add(1);
        let updated = entry.clone();

        self.persist().await;
        Some(updated)
    }

    async fn persist(&mut self) {
        match self.store.save(&self.index.by_code).await {
            Ok(()) => {
                if self.index.persist_failure.take().is_some() {
                    info!("Storage writes recovered");
                }
                debug!(entries = self.index.by_code.len(), "Registry persisted");
            }
            Err(e) => {
                error!(error = %e, "Failed to persist registry, continuing in memory");
                self.index.persist_failure = Some(e.to_string());
            }
        }
    }
}
