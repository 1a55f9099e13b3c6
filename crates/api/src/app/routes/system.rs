use axum::http::StatusCode;

/// Unauthenticated liveness probe.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
