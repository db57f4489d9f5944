//! Liveness probe shared by both services.

use axum::http::StatusCode;

/// `GET /health`: always `200 ok`, independent of any other service.
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
