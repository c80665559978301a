// tests/common/app_helper.rs

use analytics_backend::api::{app_router, AppState};
use analytics_backend::config::AppConfig;
use analytics_backend::domain::analytics_stat_model::Model;
use analytics_backend::repository::analytics_stat_repository::{
    AnalyticsStatRepository, DailyStatsSource,
};
use analytics_backend::service::analytics_service::AnalyticsService;
use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use super::{db::TestDatabase, init_test_env, mock_stats_source::MockDailyStatsSource};

/// 任意の取得元でアプリを組み立てる
pub fn setup_app_with_source(source: Arc<dyn DailyStatsSource>) -> Router {
    init_test_env();

    let app_config = AppConfig::for_testing();
    let analytics_service = Arc::new(AnalyticsService::new(source));
    app_router(AppState::new(analytics_service, None, &app_config))
}

/// インメモリのレコードでアプリを組み立てる
pub fn setup_mock_app(records: Vec<Model>) -> (Router, MockDailyStatsSource) {
    let source = MockDailyStatsSource::new(records);
    let app = setup_app_with_source(Arc::new(source.clone()));
    (app, source)
}

/// PostgreSQL コンテナを使ってアプリを組み立てる
pub async fn setup_db_app() -> (Router, TestDatabase) {
    init_test_env();

    let db = TestDatabase::new().await;
    let app_config = AppConfig::for_testing();
    let repo = Arc::new(AnalyticsStatRepository::new(db.connection.clone()));
    let analytics_service = Arc::new(AnalyticsService::new(repo));
    let app = app_router(AppState::new(
        analytics_service,
        Some(Arc::new(db.connection.clone())),
        &app_config,
    ));

    (app, db)
}

/// GET リクエストを送り、ステータスと JSON ボディを返す
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}
