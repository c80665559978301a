// src/api/mod.rs
use crate::config::AppConfig;
use crate::logging::{inject_request_context, logging_middleware};
use crate::service::analytics_service::AnalyticsService;
use axum::{http::HeaderValue, http::Method, middleware, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod handlers;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub analytics_service: Arc<AnalyticsService>,
    /// ヘルスチェック用（テストでは None）
    pub db: Option<Arc<DatabaseConnection>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        analytics_service: Arc<AnalyticsService>,
        db: Option<Arc<DatabaseConnection>>,
        app_config: &AppConfig,
    ) -> Self {
        Self {
            analytics_service,
            db,
            config: Arc::new(app_config.clone()),
        }
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    if config.allows_any_origin() {
        if config.is_production() {
            tracing::warn!("CORS allows any origin in production");
        }
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

/// 全ルートとミドルウェアを組み立てる
pub fn app_router(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config);

    Router::new()
        .merge(handlers::analytics_handler::analytics_router(
            app_state.clone(),
        ))
        .merge(handlers::system_handler::system_router(app_state))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
