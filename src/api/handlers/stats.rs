//! Handler for detailed link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::EntryStats;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the counters of one code.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Response
///
/// ```json
/// {
///   "code": "g",
///   "url": "https://github.com/meain",
///   "mode": "sub",
///   "short_url": "http://localhost:8088/g",
///   "redirect_count": 42,
///   "shorten_count": 3
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<EntryStats>, AppError> {
    let entry = state.stats_service.get(&code).await?;
    let short_url = state.short_url(&entry.code);

    Ok(Json(EntryStats::new(entry, short_url)))
}
