// src/service/retention.rs

//! リテンションスナップショットの選択
//!
//! リテンションは日ごとに合算できないため、コホートが十分に成熟した1日を選んで
//! そのスナップショットをそのまま返す。

use super::date_range::{sub_days, DateWindow};
use crate::domain::analytics_stat_model::Model;
use chrono::NaiveDate;
use sea_orm::entity::prelude::Json;

/// 対象期間の日数がこれ以上なら期間の初日を使う
pub const FULL_SPAN_DAYS: i64 = 49;
/// 短い期間では今日からこの日数だけ遡った日を使う
pub const MATURITY_LOOKBACK_DAYS: u64 = 50;

/// この日より前のリテンションデータは有効とみなさない（2025-05-01）
pub fn retention_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 1).expect("2025-05-01 is a valid date")
}

pub fn retention_target_date(window: &DateWindow, today: NaiveDate) -> NaiveDate {
    let epoch = retention_epoch();

    if window.from < epoch {
        epoch
    } else if window.span_days() >= FULL_SPAN_DAYS {
        window.from
    } else {
        sub_days(today, MATURITY_LOOKBACK_DAYS)
    }
}

/// 対象日のレコードのスナップショットを返す。該当がなければ `None`
pub fn select_retention<'a>(records: &'a [Model], target: NaiveDate) -> Option<&'a Json> {
    records
        .iter()
        .find(|record| record.date == target)
        .and_then(|record| record.user_retention.as_ref())
        .filter(|snapshot| !snapshot.is_null())
}

/// レスポンス用の空のリテンション
pub fn empty_retention() -> Json {
    Json::Array(Vec::new())
}
