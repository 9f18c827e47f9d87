//! Health endpoint.

use axum::Json;

use crate::dto::HealthResponse;

/// Liveness check.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
