use axum::{extract::State, http::StatusCode, response::Json};
use tracing::instrument;

use crate::pipeline::ACTUAL_FILE;
use crate::schemas::{AppState, HealthResponse};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "Service is unhealthy", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, StatusCode> {
    // Check that the authoritative actual-data file is where we expect it
    let data_status = if state.config.data_dir.join(ACTUAL_FILE).is_file() {
        "available".to_string()
    } else {
        "missing".to_string()
    };

    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data: data_status,
    };

    Ok(Json(response))
}
