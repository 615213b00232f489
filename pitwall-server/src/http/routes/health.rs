//! Service health: database reachability and embedded schema version

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::migrations;
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// "ok" or "degraded"
    pub status: &'static str,
    pub database_reachable: bool,
    /// Latest migration shipped with this binary
    pub schema_version: i64,
}

/// GET /health - 200 when the pool can hand out a connection, 503 otherwise
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthReport>) {
    let database_reachable = match state.drivers.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Health check could not reach database: {}", e);
            false
        }
    };

    let (status_code, status) = if database_reachable {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status_code,
        Json(HealthReport {
            status,
            database_reachable,
            schema_version: migrations::latest_version(),
        }),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
