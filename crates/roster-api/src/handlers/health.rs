//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::{ApiResponse, HealthResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /health
///
/// 200 when the store answers, 503 otherwise. A store that cannot be
/// reached reports `unavailable` rather than an error body.
pub async fn health(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<HealthResponse>>), ApiError> {
    let healthy = match state.store.health_check().await {
        Ok(healthy) => healthy,
        Err(err) if err.is_unavailable() => {
            tracing::warn!(error = %err.message, "Store unreachable during health check");
            false
        }
        Err(err) => return Err(err.into()),
    };
    let (status, label) = if healthy {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    Ok((
        status,
        Json(ApiResponse::ok(HealthResponse {
            status: label.to_string(),
            backend: state.store.backend().to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })),
    ))
}
