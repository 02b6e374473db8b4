//! Handler for the statistics listing.

use axum::{Json, extract::State};

use crate::api::dto::stats::{EntryStats, StatsListResponse};
use crate::state::AppState;

/// Lists every entry sorted by code, with totals.
///
/// # Endpoint
///
/// `GET /api/stats`
pub async fn stats_list_handler(State(state): State<AppState>) -> Json<StatsListResponse> {
    let summary = state.stats_service.summary().await;
    let items = state
        .stats_service
        .list()
        .await
        .into_iter()
        .map(|entry| {
            let short_url = state.short_url(&entry.code);
            EntryStats::new(entry, short_url)
        })
        .collect();

    Json(StatsListResponse { summary, items })
}
