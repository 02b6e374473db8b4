//! DTOs for entry statistics.

use serde::Serialize;

use crate::application::services::StatsSummary;
use crate::domain::entities::{Entry, Mode};

/// Counters and target of a single code.
#[derive(Debug, Serialize)]
pub struct EntryStats {
    pub code: String,
    pub url: String,
    pub mode: Mode,
    pub short_url: String,
    pub redirect_count: u64,
    pub shorten_count: u64,
}

impl EntryStats {
    pub fn new(entry: Entry, short_url: String) -> Self {
        Self {
            code: entry.code,
            url: entry.url,
            mode: entry.mode,
            short_url,
            redirect_count: entry.redirect_count,
            shorten_count: entry.shorten_count,
        }
    }
}

/// Every entry plus totals.
#[derive(Debug, Serialize)]
pub struct StatsListResponse {
    pub summary: StatsSummary,
    pub items: Vec<EntryStats>,
}
