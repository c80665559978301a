// src/main.rs
use analytics_backend::api::{app_router, AppState};
use analytics_backend::config::AppConfig;
use analytics_backend::db;
use analytics_backend::logging::init_tracing;
use analytics_backend::repository::analytics_stat_repository::AnalyticsStatRepository;
use analytics_backend::service::analytics_service::AnalyticsService;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    init_tracing();

    tracing::info!("Starting Analytics Backend server...");

    // 設定を読み込む
    let app_config = AppConfig::from_env()?;
    tracing::info!(
        environment = %app_config.environment,
        addr = %app_config.server_addr(),
        schema = ?app_config.database.schema,
        "Configuration loaded"
    );

    // データベース接続を作成
    let db_pool = db::connect(&app_config.database).await?;
    tracing::info!("Database pool created successfully.");

    if app_config.database.run_migrations {
        Migrator::up(&db_pool, None).await?;
        tracing::info!("Database migrations applied.");
    }

    let stats_repo = Arc::new(AnalyticsStatRepository::new(db_pool.clone()));
    let analytics_service = Arc::new(AnalyticsService::new(stats_repo));

    let app_state = AppState::new(analytics_service, Some(Arc::new(db_pool)), &app_config);
    let app_router = app_router(app_state);

    // サーバーの起動
    let listener = TcpListener::bind(app_config.server_addr()).await?;
    tracing::info!(
        "Router configured. Server listening on {}",
        app_config.server_addr()
    );

    axum::serve(listener, app_router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
