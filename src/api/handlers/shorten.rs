//! Handler for link shortening endpoint.

use axum::{body::Bytes, extract::State};
use serde_json::json;
use tracing::debug;

use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a URL and returns its short URL as plain text.
///
/// # Endpoint
///
/// `POST /`
///
/// The body is parsed as JSON whatever the `Content-Type` header says.
///
/// # Request Body
///
/// ```json
/// { "url": "https://github.com/meain", "code": "gh", "mode": "sub" }
/// ```
///
/// # Response
///
/// ```text
/// http://localhost:8088/gh
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: unparsable body, invalid URL, code or mode
/// - **409 Conflict**: code taken by another URL, or URL registered under another mode
/// - **500 Internal Server Error**: code space exhausted
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<String, AppError> {
    let payload: ShortenRequest = serde_json::from_slice(&body).map_err(|e| {
        AppError::bad_request(
            "Unable to parse request body",
            json!({ "reason": e.to_string() }),
        )
    })?;

    let command = payload.into_command()?;

    let code = state
        .shortener_service
        .shorten(&command.url, command.code.as_deref(), command.mode)
        .await?;

    debug!(code = %code, url = %command.url, "Shorten request served");

    Ok(state.short_url(&code))
}
