// tests/integration/export_tests.rs

use axum::http::{header, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::common::{
    app_helper::setup_full_app,
    auth_helper::register_test_user,
    request::{create_get_request, create_request, read_bytes, read_json},
};

#[tokio::test]
async fn test_csv_export_requires_entries() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let res = app
        .clone()
        .oneshot(create_get_request("/api/export/csv", &user.token))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = read_json(res).await;
    assert_eq!(body["message"], "No health entries found");
}

#[tokio::test]
async fn test_csv_export_with_date_range() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    for (date, heart_rate) in [
        ("2025-01-10T08:00:00Z", 71),
        ("2025-01-31T21:00:00Z", 74),
        ("2025-02-03T08:00:00Z", 77),
    ] {
        let res = app
            .clone()
            .oneshot(create_request(
                "POST",
                "/api/health",
                &user.token,
                &json!({ "date": date, "heartRate": heart_rate }),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = app
        .clone()
        .oneshot(create_get_request(
            "/api/export/csv?startDate=2025-01-01&endDate=2025-01-31",
            &user.token,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "text/csv");
    let disposition = res.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
    assert!(disposition.starts_with("attachment; filename=\"health-data-"));

    let body = String::from_utf8(read_bytes(res).await).unwrap();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(body.contains("74"));
    assert!(!body.contains("77"));

    // 片側だけなら全件
    let res = app
        .clone()
        .oneshot(create_get_request("/api/export/csv?startDate=2025-02-01", &user.token))
        .await
        .unwrap();
    let body = String::from_utf8(read_bytes(res).await).unwrap();
    assert_eq!(body.lines().count(), 4);

    let res = app
        .clone()
        .oneshot(create_get_request(
            "/api/export/csv?startDate=01/01/2025&endDate=2025-01-31",
            &user.token,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_pdf_export() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    // エントリがなくても PDF は生成できる
    let res = app
        .clone()
        .oneshot(create_get_request("/api/export/pdf?days=7", &user.token))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[header::CONTENT_TYPE], "application/pdf");
    let disposition = res.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
    assert!(disposition.contains("VitalTrack-Report-"));
    let bytes = read_bytes(res).await;
    assert!(bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn test_summary_export() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let res = app
        .clone()
        .oneshot(create_request(
            "POST",
            "/api/health",
            &user.token,
            &json!({ "heartRate": 66, "steps": 8000 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = app
        .clone()
        .oneshot(create_request("POST", "/api/export/summary", &user.token, &json!({})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["period"], "30 days");
    assert_eq!(body["totalEntries"], 1);
    assert_eq!(body["user"]["email"], user.email.as_str());
    assert_eq!(body["metrics"]["steps"]["average"], 8000.0);
    assert_eq!(body["metrics"]["heartRate"]["dataPoints"], 1);
    assert!(body["insights"].is_array());

    let res = app
        .clone()
        .oneshot(create_request(
            "POST",
            "/api/export/summary",
            &user.token,
            &json!({ "days": 7, "includeInsights": false }),
        ))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert_eq!(body["period"], "7 days");
    assert!(body.get("insights").is_none());
}
