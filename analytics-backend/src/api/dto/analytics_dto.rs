// src/api/dto/analytics_dto.rs
use chrono::NaiveDate;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /api/analytics/summary` のクエリ
///
/// 日付はここでは検証しない（不正な値は既定値にフォールバックする）。
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SummaryQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// 日別推移グラフ用
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub new_users: i64,
    pub active_users: i64,
    pub sessions: i64,
}

/// 日別エンゲージメント時間
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementPoint {
    pub date: NaiveDate,
    pub avg_engagement_time_sec: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSource {
    #[serde(rename = "type")]
    pub source_type: &'static str,
    pub count: i64,
}

/// 内訳の1エントリ。`{ "<key_field>": "<key>", "count": n }` としてシリアライズする
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownEntry {
    pub key_field: &'static str,
    pub key: &'static str,
    pub count: u64,
}

impl Serialize for BreakdownEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.key_field, self.key)?;
        map.serialize_entry("count", &self.count)?;
        map.end()
    }
}

/// 1カテゴリ分の内訳（固定キーの宣言順）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    pub output_field: &'static str,
    pub entries: Vec<BreakdownEntry>,
}

impl Breakdown {
    pub fn count(&self, key: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.count)
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.key).collect()
    }
}

/// 全カテゴリの内訳。各カテゴリを `output_field` をキーとしてレスポンスに展開する
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdowns(pub Vec<Breakdown>);

impl Breakdowns {
    pub fn get(&self, output_field: &str) -> Option<&Breakdown> {
        self.0
            .iter()
            .find(|breakdown| breakdown.output_field == output_field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakdown> {
        self.0.iter()
    }
}

impl Serialize for Breakdowns {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for breakdown in &self.0 {
            map.serialize_entry(breakdown.output_field, &breakdown.entries)?;
        }
        map.end()
    }
}

/// ダッシュボード用の集計結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    pub total_users: i64,
    pub new_users: i64,
    pub active_users: i64,
    pub returning_users: i64,
    pub sessions: i64,
    pub direct_sessions: i64,
    pub referral_sessions: i64,
    pub total_revenue: f64,
    pub avg_engagement_time_sec: i64,
    pub chart_data: Vec<ChartPoint>,
    pub engagement_chart_data: Vec<EngagementPoint>,
    pub session_sources: Vec<SessionSource>,
    #[serde(flatten)]
    pub breakdowns: Breakdowns,
    pub user_retention: Value,
}
