// src/service/date_range.rs
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

/// `from` 未指定時に遡る日数
pub const DEFAULT_LOOKBACK_DAYS: u64 = 30;

/// 集計対象期間（両端を含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    /// クエリ文字列から期間を決定する。
    ///
    /// 解釈できない値はエラーにせず既定値（`from` は今日の30日前、`to` は今日）に置き換える。
    pub fn resolve(from: Option<&str>, to: Option<&str>, today: NaiveDate) -> Self {
        let from = from
            .and_then(parse_date)
            .unwrap_or_else(|| sub_days(today, DEFAULT_LOOKBACK_DAYS));
        let to = to.and_then(parse_date).unwrap_or(today);

        Self { from, to }
    }

    /// ストレージ問い合わせ用の排他的な終端（`to` の翌日）
    pub fn to_exclusive(&self) -> NaiveDate {
        self.to.succ_opt().unwrap_or(NaiveDate::MAX)
    }

    /// 両端を含む日数
    pub fn span_days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}

pub(crate) fn sub_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}

/// `YYYY-MM-DD`、RFC 3339、`YYYY-MM-DDTHH:MM:SS` を受け付け、日付部分のみを使う。
///
/// 精度を落とした `YYYY-MM` / `YYYY` はその月・年の初日、基本形式の `YYYYMMDD` も受け付ける。
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_reduced_date(raw))
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

fn parse_reduced_date(raw: &str) -> Option<NaiveDate> {
    if !raw.is_ascii() {
        return None;
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    let expanded = match raw.len() {
        4 if all_digits(raw) => format!("{raw}-01-01"),
        7 if &raw[4..5] == "-" && all_digits(&raw[..4]) && all_digits(&raw[5..]) => {
            format!("{raw}-01")
        }
        8 if all_digits(raw) => format!("{}-{}-{}", &raw[..4], &raw[4..6], &raw[6..]),
        _ => return None,
    };

    NaiveDate::parse_from_str(&expanded, "%Y-%m-%d").ok()
}
