use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- returns service status.
///
/// The gateway holds no connections of its own; upstream reachability is
/// observed per request, not probed here.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount health check routes (root-level, next to `/graphql`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
