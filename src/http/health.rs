//! Liveness endpoint.
//!
//! Reports the process only; the backend is never contacted.

use axum::http::StatusCode;

pub const HEALTH_PATH: &str = "/healthz";

pub async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "healthy!")
}
