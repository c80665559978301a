// src/domain/analytics_stat_model.rs
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 1日分の集計済み分析データ（外部のバッチで作成される）
///
/// 内訳系のカラムは `{ "キー": 件数 }` 形式の JSON だが、過去のデータには
/// `[{ "country": "Japan", "users": 3 }]` のような配列形式も混在している。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "analytics_stats")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub date: NaiveDate,
    pub total_users: i64,
    pub new_users: i64,
    pub active_users: i64,
    pub returning_users: i64,
    pub sessions: i64,
    pub direct_sessions: i64,
    pub referral_sessions: i64,
    #[sea_orm(column_type = "Double")]
    pub total_revenue: f64,
    #[sea_orm(column_type = "Double")]
    pub avg_engagement_time_sec: f64,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub top_countries: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub active_users_by_country: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub new_users_by_channel: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub event_summary: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub user_gender: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub user_language: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub platform_summary: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub os_summary: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub browser_summary: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub device_category: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub user_activity_over_time: Option<Json>,
    /// コホート別リテンションのスナップショット（加工せずにそのまま返す）
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub user_retention: Option<Json>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 指定日の空レコード（テストやシードデータ作成用）
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            id: 0,
            date,
            total_users: 0,
            new_users: 0,
            active_users: 0,
            returning_users: 0,
            sessions: 0,
            direct_sessions: 0,
            referral_sessions: 0,
            total_revenue: 0.0,
            avg_engagement_time_sec: 0.0,
            top_countries: None,
            active_users_by_country: None,
            new_users_by_channel: None,
            event_summary: None,
            user_gender: None,
            user_language: None,
            platform_summary: None,
            os_summary: None,
            browser_summary: None,
            device_category: None,
            user_activity_over_time: None,
            user_retention: None,
            created_at: Utc::now(),
        }
    }
}
