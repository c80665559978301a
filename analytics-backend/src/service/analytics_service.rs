// src/service/analytics_service.rs

use crate::api::dto::analytics_dto::AggregateSummary;
use crate::error::AppResult;
use crate::repository::analytics_stat_repository::DailyStatsSource;
use crate::service::date_range::DateWindow;
use crate::service::stat_merger::merge_daily_stats;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::{error, info};

pub struct AnalyticsService {
    stats_source: Arc<dyn DailyStatsSource>,
}

impl AnalyticsService {
    pub fn new(stats_source: Arc<dyn DailyStatsSource>) -> Self {
        Self { stats_source }
    }

    /// 今日（UTC）を基準にサマリーを作成
    pub async fn get_summary(
        &self,
        from: Option<&str>,
        to: Option<&str>,
    ) -> AppResult<AggregateSummary> {
        self.get_summary_as_of(from, to, Utc::now().date_naive())
            .await
    }

    pub async fn get_summary_as_of(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        today: NaiveDate,
    ) -> AppResult<AggregateSummary> {
        let window = DateWindow::resolve(from, to, today);

        // ストレージのエラーはそのまま呼び出し元へ返す（部分的な結果は返さない）
        let records = self
            .stats_source
            .fetch_daily_stats(window.from, window.to_exclusive())
            .await
            .map_err(|e| {
                error!(
                    error = %e,
                    from = %window.from,
                    to = %window.to,
                    "Failed to fetch daily analytics stats"
                );
                e
            })?;

        info!(
            from = %window.from,
            to = %window.to,
            raw_from = ?from,
            raw_to = ?to,
            records = records.len(),
            "Analytics summary requested"
        );

        Ok(merge_daily_stats(&records, &window, today))
    }
}
