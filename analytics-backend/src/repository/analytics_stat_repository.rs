// src/repository/analytics_stat_repository.rs
use crate::domain::analytics_stat_model::{self, Entity as AnalyticsStat};
use crate::error::AppResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

/// 日次統計の取得元
///
/// `from` 以上 `to_exclusive` 未満の日付のレコードを日付の昇順で返すこと。
/// 呼び出し側では並べ替えを行わない。
#[async_trait]
pub trait DailyStatsSource: Send + Sync {
    async fn fetch_daily_stats(
        &self,
        from: NaiveDate,
        to_exclusive: NaiveDate,
    ) -> AppResult<Vec<analytics_stat_model::Model>>;
}

pub struct AnalyticsStatRepository {
    db: DatabaseConnection,
}

impl AnalyticsStatRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_date_range(
        &self,
        from: NaiveDate,
        to_exclusive: NaiveDate,
    ) -> AppResult<Vec<analytics_stat_model::Model>> {
        let records = AnalyticsStat::find()
            .filter(analytics_stat_model::Column::Date.gte(from))
            .filter(analytics_stat_model::Column::Date.lt(to_exclusive))
            .order_by_asc(analytics_stat_model::Column::Date)
            .all(&self.db)
            .await?;

        Ok(records)
    }
}

#[async_trait]
impl DailyStatsSource for AnalyticsStatRepository {
    async fn fetch_daily_stats(
        &self,
        from: NaiveDate,
        to_exclusive: NaiveDate,
    ) -> AppResult<Vec<analytics_stat_model::Model>> {
        self.find_by_date_range(from, to_exclusive).await
    }
}
