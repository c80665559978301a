// src/api/handlers/analytics_handler.rs

use crate::api::dto::analytics_dto::{AggregateSummary, SummaryQuery};
use crate::api::AppState;
use crate::error::AppResult;
use axum::{
    extract::{Json, Query, State},
    routing::get,
    Router,
};

/// 期間内の日次統計をダッシュボード用に集計して返す
///
/// `from` / `to` はどちらも省略可能。不正な日付は既定値に置き換えられ、エラーにはならない。
pub async fn get_summary_handler(
    State(app_state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> AppResult<Json<AggregateSummary>> {
    let summary = app_state
        .analytics_service
        .get_summary(query.from.as_deref(), query.to.as_deref())
        .await?;

    Ok(Json(summary))
}

pub fn analytics_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/analytics/summary", get(get_summary_handler))
        .with_state(app_state)
}
