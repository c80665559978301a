// src/domain/analytics_category.rs

//! 集計結果に必ず含めるカテゴリと、その固定キー一覧。
//!
//! 出力の内訳は元データに何が入っていても、ここで宣言した順序・キーのみで構成される。

use super::analytics_stat_model::Model;
use sea_orm::entity::prelude::Json;

pub const COUNTRIES: &[&str] = &[
    "United States",
    "France",
    "Japan",
    "Thailand",
    "Taiwan",
    "Indonesia",
    "South Korea",
    "Philippines",
    "Singapore",
];
pub const CHANNELS: &[&str] = &["direct", "referral", "organic"];
pub const EVENTS: &[&str] = &["signup", "login", "view", "click"];
pub const GENDERS: &[&str] = &["male", "female", "other"];
pub const LANGUAGES: &[&str] = &["us", "fr", "jp", "th", "tw", "id", "kr", "ph", "sg"];
pub const PLATFORMS: &[&str] = &["mobile", "web"];
pub const OPERATING_SYSTEMS: &[&str] = &["windows", "macos", "android", "ios", "ubuntu"];
pub const BROWSERS: &[&str] = &[
    "chrome",
    "firefox",
    "edge",
    "safari",
    "chrome-inapp",
    "safari-inapp",
];
pub const DEVICES: &[&str] = &["desktop", "mobile", "tablet"];
pub const HOURS: &[&str] = &[
    "00", "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14",
    "15", "16", "17", "18", "19", "20", "21", "22", "23",
];

/// カテゴリ1件分の定義
pub struct CategorySpec {
    /// レスポンス上のフィールド名
    pub output_field: &'static str,
    /// 各エントリでキーを格納するフィールド名（`{ "country": "Japan", "count": 3 }`）
    pub key_field: &'static str,
    pub vocabulary: &'static [&'static str],
    /// レコードから元データの内訳を取り出す
    pub source: fn(&Model) -> Option<&Json>,
}

impl CategorySpec {
    pub fn source_of<'a>(&self, record: &'a Model) -> Option<&'a Json> {
        (self.source)(record)
    }
}

/// 集計対象カテゴリ一覧（レスポンスの出力順）
pub const CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        output_field: "topCountries",
        key_field: "country",
        vocabulary: COUNTRIES,
        source: |r| r.top_countries.as_ref(),
    },
    CategorySpec {
        output_field: "activeUsersByCountry",
        key_field: "country",
        vocabulary: COUNTRIES,
        source: |r| r.active_users_by_country.as_ref(),
    },
    CategorySpec {
        output_field: "newUsersByChannel",
        key_field: "channel",
        vocabulary: CHANNELS,
        source: |r| r.new_users_by_channel.as_ref(),
    },
    CategorySpec {
        output_field: "eventSummary",
        key_field: "event",
        vocabulary: EVENTS,
        source: |r| r.event_summary.as_ref(),
    },
    CategorySpec {
        output_field: "userGender",
        key_field: "gender",
        vocabulary: GENDERS,
        source: |r| r.user_gender.as_ref(),
    },
    CategorySpec {
        output_field: "userLanguage",
        key_field: "language",
        vocabulary: LANGUAGES,
        source: |r| r.user_language.as_ref(),
    },
    CategorySpec {
        output_field: "platformSummary",
        key_field: "platform",
        vocabulary: PLATFORMS,
        source: |r| r.platform_summary.as_ref(),
    },
    CategorySpec {
        output_field: "osSummary",
        key_field: "os",
        vocabulary: OPERATING_SYSTEMS,
        source: |r| r.os_summary.as_ref(),
    },
    CategorySpec {
        output_field: "browserSummary",
        key_field: "browser",
        vocabulary: BROWSERS,
        source: |r| r.browser_summary.as_ref(),
    },
    CategorySpec {
        output_field: "deviceCategory",
        key_field: "device",
        vocabulary: DEVICES,
        source: |r| r.device_category.as_ref(),
    },
    CategorySpec {
        output_field: "userActivityOverTime",
        key_field: "hour",
        vocabulary: HOURS,
        source: |r| r.user_activity_over_time.as_ref(),
    },
];

#[cfg(test)]
pub(crate) fn find_category(output_field: &str) -> Option<&'static CategorySpec> {
    CATEGORIES
        .iter()
        .find(|category| category.output_field == output_field)
}
