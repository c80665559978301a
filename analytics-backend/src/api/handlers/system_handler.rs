// src/api/handlers/system_handler.rs
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::{api::AppState, db};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub environment: String,
    /// `ok` / `unavailable` / `not_configured`
    pub database: String,
}

pub async fn health_handler(State(app_state): State<AppState>) -> Json<HealthResponse> {
    let database = match &app_state.db {
        Some(conn) if db::ping(conn).await => "ok",
        Some(_) => {
            tracing::warn!("Health check: database ping failed");
            "unavailable"
        }
        None => "not_configured",
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        environment: app_state.config.environment.clone(),
        database: database.to_string(),
    })
}

pub fn system_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_state)
}
