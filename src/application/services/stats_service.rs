//! Counter read-out for registered codes.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;

use crate::domain::Registry;
use crate::domain::entities::Entry;
use crate::error::AppError;

/// Totals across every registered code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatsSummary {
    pub entries: usize,
    pub redirects: u64,
    pub shortens: u64,
}

/// Service for reading entry counters.
pub struct StatsService {
    registry: Arc<Registry>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Returns the entry registered under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn get(&self, code: &str) -> Result<Entry, AppError> {
        self.registry
            .get_by_code(code)
            .await
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Returns every entry, sorted by code.
    pub async fn list(&self) -> Vec<Entry> {
        self.registry.snapshot().await
    }

    /// Sums the counters of every entry.
    pub async fn summary(&self) -> StatsSummary {
        self.registry
            .snapshot()
            .await
            .iter()
            .fold(StatsSummary::default(), |acc, entry| StatsSummary {
                entries: acc.entries + 1,
                redirects: acc.redirects.saturating_add(entry.redirect_count),
                shortens: acc.shortens.saturating_add(entry.shorten_count),
            })
    }
}
