// tests/integration/notification_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::common::{
    app_helper::setup_full_app,
    auth_helper::register_test_user,
    request::{create_request, read_json},
};

#[tokio::test]
async fn test_weekly_report_without_data() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let res = app
        .clone()
        .oneshot(create_request(
            "POST",
            "/api/notifications/weekly-report",
            &user.token,
            &json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["sent"], 0);
}

#[tokio::test]
async fn test_weekly_report_and_alerts_are_sent() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let res = app
        .clone()
        .oneshot(create_request(
            "POST",
            "/api/health",
            &user.token,
            &json!({ "heartRate": 112, "sleep": 5 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = app
        .clone()
        .oneshot(create_request(
            "POST",
            "/api/notifications/weekly-report",
            &user.token,
            &json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["message"], "Weekly report sent");
    assert_eq!(body["sent"], 1);

    // 心拍と睡眠の警告
    let res = app
        .clone()
        .oneshot(create_request(
            "POST",
            "/api/notifications/health-alerts",
            &user.token,
            &json!({}),
        ))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert_eq!(body["message"], "Health alerts sent");
    assert_eq!(body["sent"], 2);
}

#[tokio::test]
async fn test_notifications_respect_preferences() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let update = json!({
        "notificationPreferences": {
            "emailNotifications": false,
            "weeklyReports": false,
            "alertThresholds": true
        }
    });
    let res = app
        .clone()
        .oneshot(create_request("PUT", "/api/users/profile", &user.token, &update))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .clone()
        .oneshot(create_request(
            "POST",
            "/api/notifications/weekly-report",
            &user.token,
            &json!({}),
        ))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert_eq!(body["message"], "Weekly reports are disabled");

    let res = app
        .clone()
        .oneshot(create_request(
            "POST",
            "/api/notifications/health-alerts",
            &user.token,
            &json!({}),
        ))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert_eq!(body["message"], "Health alerts are disabled");
    assert_eq!(body["sent"], 0);
}
