// tests/integration/analytics/summary_db_tests.rs

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{app_helper, test_data};

#[tokio::test]
#[ignore = "requires Docker for testcontainers"]
async fn test_summary_reads_inclusive_range_from_postgres() {
    let (app, db) = app_helper::setup_db_app().await;

    for day in [
        test_data::date(2025, 5, 31),
        test_data::date(2025, 6, 1),
        test_data::date(2025, 6, 10),
        test_data::date(2025, 6, 11),
    ] {
        test_data::insert_daily_stat(&db.connection, test_data::create_daily_stat(day)).await;
    }

    let (status, json) = app_helper::get_json(
        &app,
        "/api/analytics/summary?from=2025-06-01&to=2025-06-10",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalUsers"], 200);
    assert_eq!(json["chartData"].as_array().unwrap().len(), 2);
    assert_eq!(json["chartData"][0]["date"], "2025-06-01");
    assert_eq!(json["chartData"][1]["date"], "2025-06-10");
}

#[tokio::test]
#[ignore = "requires Docker for testcontainers"]
async fn test_summary_chart_is_ordered_regardless_of_insert_order() {
    let (app, db) = app_helper::setup_db_app().await;

    for day in [
        test_data::date(2025, 6, 3),
        test_data::date(2025, 6, 1),
        test_data::date(2025, 6, 2),
    ] {
        test_data::insert_daily_stat(&db.connection, test_data::create_daily_stat(day)).await;
    }

    let (_, json) = app_helper::get_json(
        &app,
        "/api/analytics/summary?from=2025-06-01&to=2025-06-03",
    )
    .await;

    let dates: Vec<&str> = json["chartData"]
        .as_array()
        .unwrap()
        .iter()
        .map(|point| point["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-06-01", "2025-06-02", "2025-06-03"]);
}

#[tokio::test]
#[ignore = "requires Docker for testcontainers"]
async fn test_summary_round_trips_json_columns() {
    let (app, db) = app_helper::setup_db_app().await;

    let retention = json!([{ "cohort": "2025-05-01", "day1": 0.8, "day7": 0.4 }]);
    test_data::insert_daily_stat(
        &db.connection,
        test_data::create_daily_stat_with_retention(test_data::date(2025, 5, 1), retention.clone()),
    )
    .await;

    let (status, json) = app_helper::get_json(
        &app,
        "/api/analytics/summary?from=2025-04-20&to=2025-05-10",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["userRetention"], retention);
    let japan = json["topCountries"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["country"] == "Japan")
        .unwrap();
    assert_eq!(japan["count"], 10);
}
