use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check endpoint for liveness probes.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "greeting-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness check endpoint. No backing dependencies, so always ready.
pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}
