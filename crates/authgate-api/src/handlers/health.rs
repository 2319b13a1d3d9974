//! Health probe.

use axum::Json;
use axum::extract::State;

use authgate_core::traits::cache::CacheProvider;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.db.health_check().await {
        Ok(true) => "up",
        _ => "down",
    };
    let cache = match state.cache.health_check().await {
        Ok(true) => "up",
        _ => "down",
    };

    let status = if database == "up" && cache == "up" {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        cache: cache.to_string(),
    })
}
