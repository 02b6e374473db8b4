//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health` (never behind authentication)
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: The last save failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "registry": { "status": "ok", "message": "12 entries" },
///     "storage": { "status": "ok", "message": "json file data.json" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let registry_check = check_registry(&state).await;
    let storage_check = check_storage(&state).await;

    let all_healthy = registry_check.status == "ok" && storage_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            registry: registry_check,
            storage: storage_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_registry(state: &AppState) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("{} entries", state.registry.len().await)),
    }
}

/// Reports the outcome of the most recent save.
async fn check_storage(state: &AppState) -> CheckStatus {
    match state.registry.persistence_status().await {
        None => CheckStatus {
            status: "ok".to_string(),
            message: Some(state.registry.store_description()),
        },
        Some(failure) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Last save failed: {}", failure)),
        },
    }
}
