// src/service/stat_merger.rs

//! 日次レコードを1つの集計結果に畳み込む
//!
//! カテゴリ別の内訳は [`CATEGORIES`] の定義表から一律に処理する。
//! 形式の崩れた内訳や固定キー以外のキーはエラーにせず、そのレコードのそのカテゴリだけ 0 として扱う。

use super::date_range::DateWindow;
use super::retention::{empty_retention, retention_target_date, select_retention};
use crate::api::dto::analytics_dto::{
    AggregateSummary, Breakdown, BreakdownEntry, Breakdowns, ChartPoint, EngagementPoint,
    SessionSource,
};
use crate::domain::analytics_category::{CategorySpec, CATEGORIES};
use crate::domain::analytics_stat_model::Model;
use chrono::NaiveDate;
use sea_orm::entity::prelude::Json;
use serde_json::Map;
use tracing::debug;

/// 配列形式の内訳でキーとみなすフィールド（カテゴリ固有のフィールドの次に参照）
const FALLBACK_KEY_FIELDS: &[&str] = &["name", "key"];
/// 配列形式の内訳で件数とみなすフィールド
const COUNT_FIELDS: &[&str] = &["count", "users", "value"];

/// 1カテゴリ分の累積値
struct CategoryAccumulator {
    category: &'static CategorySpec,
    counts: Vec<u64>,
}

impl CategoryAccumulator {
    fn seeded(category: &'static CategorySpec) -> Self {
        Self {
            category,
            counts: vec![0; category.vocabulary.len()],
        }
    }

    fn add(&mut self, record: &Model) {
        let Some(source) = self.category.source_of(record) else {
            return;
        };

        match source {
            Json::Object(_) | Json::Array(_) => {}
            Json::Null => return,
            _ => {
                debug!(
                    date = %record.date,
                    field = self.category.output_field,
                    "Ignoring malformed breakdown"
                );
                return;
            }
        }

        for (slot, key) in self.counts.iter_mut().zip(self.category.vocabulary) {
            *slot = slot.saturating_add(count_for_key(source, self.category.key_field, key));
        }
    }

    fn into_breakdown(self) -> Breakdown {
        let category = self.category;
        Breakdown {
            output_field: category.output_field,
            entries: category
                .vocabulary
                .iter()
                .copied()
                .zip(self.counts)
                .map(|(key, count)| BreakdownEntry {
                    key_field: category.key_field,
                    key,
                    count,
                })
                .collect(),
        }
    }
}

/// 内訳データから指定キーの件数を読む。キーがなければ 0
fn count_for_key(source: &Json, key_field: &str, key: &str) -> u64 {
    match source {
        Json::Object(map) => map.get(key).map_or(0, as_count),
        Json::Array(items) => items
            .iter()
            .filter_map(Json::as_object)
            .filter(|item| entry_key(item, key_field) == Some(key))
            .map(entry_count)
            .fold(0, u64::saturating_add),
        _ => 0,
    }
}

fn entry_key<'a>(item: &'a Map<String, Json>, key_field: &str) -> Option<&'a str> {
    std::iter::once(key_field)
        .chain(FALLBACK_KEY_FIELDS.iter().copied())
        .find_map(|field| item.get(field).and_then(Json::as_str))
}

fn entry_count(item: &Map<String, Json>) -> u64 {
    COUNT_FIELDS
        .iter()
        .find_map(|field| item.get(*field))
        .map_or(0, as_count)
}

/// 非負の数値のみ件数として扱う（小数は四捨五入）
fn as_count(value: &Json) -> u64 {
    if let Some(count) = value.as_u64() {
        return count;
    }
    match value.as_f64() {
        Some(count) if count.is_finite() && count >= 0.0 => count.round() as u64,
        _ => 0,
    }
}

#[derive(Debug, Default)]
struct ScalarTotals {
    total_users: i64,
    new_users: i64,
    active_users: i64,
    returning_users: i64,
    sessions: i64,
    direct_sessions: i64,
    referral_sessions: i64,
    total_revenue: f64,
    engagement_sum: f64,
}

impl ScalarTotals {
    fn add(&mut self, record: &Model) {
        self.total_users = self.total_users.saturating_add(record.total_users);
        self.new_users = self.new_users.saturating_add(record.new_users);
        self.active_users = self.active_users.saturating_add(record.active_users);
        self.returning_users = self.returning_users.saturating_add(record.returning_users);
        self.sessions = self.sessions.saturating_add(record.sessions);
        self.direct_sessions = self.direct_sessions.saturating_add(record.direct_sessions);
        self.referral_sessions = self.referral_sessions.saturating_add(record.referral_sessions);
        self.total_revenue += record.total_revenue;
        self.engagement_sum += record.avg_engagement_time_sec;
    }
}

/// 平均エンゲージメント時間（四捨五入）。レコードがなければ 0
fn average_engagement(engagement_sum: f64, record_count: usize) -> i64 {
    if record_count == 0 {
        return 0;
    }
    (engagement_sum / record_count as f64).round() as i64
}

/// 期間内のレコード（日付昇順）を集計する。
///
/// `window` と `today` はリテンションの対象日を決めるためだけに使う。
pub fn merge_daily_stats(
    records: &[Model],
    window: &DateWindow,
    today: NaiveDate,
) -> AggregateSummary {
    let mut totals = ScalarTotals::default();
    let mut accumulators: Vec<CategoryAccumulator> =
        CATEGORIES.iter().map(CategoryAccumulator::seeded).collect();

    for record in records {
        totals.add(record);
        for accumulator in &mut accumulators {
            accumulator.add(record);
        }
    }

    let retention_date = retention_target_date(window, today);
    let user_retention = select_retention(records, retention_date)
        .cloned()
        .unwrap_or_else(empty_retention);

    AggregateSummary {
        total_users: totals.total_users,
        new_users: totals.new_users,
        active_users: totals.active_users,
        returning_users: totals.returning_users,
        sessions: totals.sessions,
        direct_sessions: totals.direct_sessions,
        referral_sessions: totals.referral_sessions,
        total_revenue: totals.total_revenue,
        avg_engagement_time_sec: average_engagement(totals.engagement_sum, records.len()),
        chart_data: records
            .iter()
            .map(|r| ChartPoint {
                date: r.date,
                new_users: r.new_users,
                active_users: r.active_users,
                sessions: r.sessions,
            })
            .collect(),
        engagement_chart_data: records
            .iter()
            .map(|r| EngagementPoint {
                date: r.date,
                avg_engagement_time_sec: r.avg_engagement_time_sec,
            })
            .collect(),
        session_sources: vec![
            SessionSource {
                source_type: "direct",
                count: totals.direct_sessions,
            },
            SessionSource {
                source_type: "referral",
                count: totals.referral_sessions,
            },
        ],
        breakdowns: Breakdowns(
            accumulators
                .into_iter()
                .map(CategoryAccumulator::into_breakdown)
                .collect(),
        ),
        user_retention,
    }
}
