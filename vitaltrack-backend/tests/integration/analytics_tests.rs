// tests/integration/analytics_tests.rs

use axum::{http::StatusCode, Router};
use chrono::{Duration, Utc};
use serde_json::json;
use tower::ServiceExt;

use crate::common::{
    app_helper::setup_full_app,
    auth_helper::{register_test_user, TestUser},
    request::{create_get_request, create_request, read_json},
};

async fn record(app: &Router, user: &TestUser, days_ago: i64, payload: serde_json::Value) {
    let mut payload = payload;
    payload["date"] = json!((Utc::now() - Duration::days(days_ago) - Duration::hours(1)).to_rfc3339());
    let res = app
        .clone()
        .oneshot(create_request("POST", "/api/health", &user.token, &payload))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_analytics_without_data() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let res = app
        .clone()
        .oneshot(create_get_request("/api/analytics/stats", &user.token))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["message"], "No data available for the selected period");
    assert!(body["stats"].is_null());

    let res = app
        .clone()
        .oneshot(create_get_request("/api/analytics/insights", &user.token))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert_eq!(body["insights"], json!([]));

    let res = app
        .clone()
        .oneshot(create_get_request("/api/analytics/trends", &user.token))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert_eq!(body["message"], "Insufficient data for trend analysis");
    assert!(body["trend"].is_null());
}

#[tokio::test]
async fn test_stats_and_trends_with_entries() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    record(&app, &user, 6, json!({ "weight": 72.0, "heartRate": 70 })).await;
    record(&app, &user, 3, json!({ "weight": 71.0, "heartRate": 80 })).await;
    record(&app, &user, 1, json!({ "weight": 70.0, "heartRate": 90 })).await;
    // 期間外
    record(&app, &user, 20, json!({ "weight": 90.0 })).await;

    let res = app
        .clone()
        .oneshot(create_get_request("/api/analytics/stats?days=7", &user.token))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["dataPoints"], 3);
    assert_eq!(body["stats"]["period"], "7 days");
    assert_eq!(body["stats"]["heartRate"]["avg"], 80.0);
    assert_eq!(body["stats"]["weight"]["max"], 72.0);
    assert!(body["stats"]["sleep"].is_null());

    let res = app
        .clone()
        .oneshot(create_get_request(
            "/api/analytics/trends?metric=weight&days=7",
            &user.token,
        ))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert_eq!(body["metric"], "weight");
    assert_eq!(body["startValue"], 72.0);
    assert_eq!(body["endValue"], 70.0);
    assert_eq!(body["change"], -2.0);
    assert_eq!(body["changePercent"], -2.78);
    assert_eq!(body["trend"], "decreasing");
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let res = app
        .clone()
        .oneshot(create_get_request(
            "/api/analytics/trends?metric=heartRate&days=7",
            &user.token,
        ))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert_eq!(body["trend"], "increasing");
}

#[tokio::test]
async fn test_insights_from_recent_entries() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    record(&app, &user, 2, json!({ "heartRate": 110, "sleep": 5.5, "water": 4 })).await;
    record(&app, &user, 1, json!({ "heartRate": 104, "sleep": 6.0, "water": 5 })).await;

    let res = app
        .clone()
        .oneshot(create_get_request("/api/analytics/insights", &user.token))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["dataPoints"], 2);
    assert!(body["analysisDate"].as_str().is_some());

    let categories: Vec<&str> = body["insights"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["category"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["Heart Rate", "Sleep", "Weight", "Hydration"]);
    assert_eq!(body["insights"][0]["type"], "warning");
    assert_eq!(body["insights"][0]["severity"], "medium");
}

#[tokio::test]
async fn test_invalid_days_is_rejected() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let res = app
        .clone()
        .oneshot(create_get_request("/api/analytics/stats?days=0", &user.token))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
