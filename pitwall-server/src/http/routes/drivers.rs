//! Driver endpoints (read-only)

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use pitwall_core::Driver;

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /drivers - all drivers ordered by id
async fn list_drivers(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Driver>>, ApiError> {
    Ok(Json(state.drivers.list().await?))
}

/// GET /drivers/{id}
async fn get_driver(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Driver>, ApiError> {
    state
        .drivers
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound {
            resource: "driver",
            id: id.to_string(),
        })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/drivers", get(list_drivers))
        .route("/drivers/{id}", get(get_driver))
}
