//! HTTP Basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;
use tracing::warn;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using credentials from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic <base64(user:password)>
/// ```
///
/// Requests pass through untouched when no password is configured.
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing
/// - Header is not a Basic credential
/// - User or password do not match
///
/// Adds `WWW-Authenticate: Basic realm="link-registry"` to 401 responses.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/api/stats", get(stats_list_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !st.auth_service.is_enabled() {
        return Ok(next.run(req).await);
    }

    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            warn!(uri = %parts.uri, "Missing or malformed credentials");
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    if let Err(e) = st
        .auth_service
        .authenticate(&user, password.as_deref().unwrap_or_default())
    {
        warn!(uri = %parts.uri, user = %user, "Rejected credentials");
        return Err(e);
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
