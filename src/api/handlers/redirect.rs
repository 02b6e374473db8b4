//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::Span;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code, with an optional sub-path, to its target.
///
/// # Endpoint
///
/// `GET /{code}` and `GET /{code}/{rest...}`
///
/// # Request Flow
///
/// 1. Split the path into code and remainder
/// 2. Look up the code and count the redirect
/// 3. Append the remainder to the target, if any
/// 4. Return 307 Temporary Redirect
///
/// The remainder is appended for `exact` entries too.
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
/// Returns 400 Bad Request if the decoded remainder holds control characters.
pub async fn redirect_handler(
    Path(path): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let resolution = state.redirect_service.resolve(&path).await?;

    Span::current().record("code", resolution.code.as_str());

    let location = HeaderValue::from_str(&resolution.target).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "code": resolution.code }),
        )
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
