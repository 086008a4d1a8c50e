// tests/integration/health_entry_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{
    app_helper::setup_full_app,
    auth_helper::register_test_user,
    request::{create_get_request, create_request, read_json},
};

#[tokio::test]
async fn test_health_entry_crud() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    // 作成
    let payload = json!({
        "heartRate": 72,
        "bloodPressureSys": 120,
        "bloodPressureDia": 80,
        "sleep": 7.5,
        "notes": "Morning check"
    });
    let res = app
        .clone()
        .oneshot(create_request("POST", "/api/health", &user.token, &payload))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = read_json(res).await;
    assert_eq!(body["success"], true);
    assert!(body["meta"]["request_id"].as_str().is_some());
    let entry_id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["heartRate"], 72.0);
    assert!(body["data"]["weight"].is_null());

    // 一覧
    let res = app
        .clone()
        .oneshot(create_get_request("/api/health", &user.token))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // 更新（省略したメトリクスは維持）
    let update = json!({ "weight": 70.2 });
    let res = app
        .clone()
        .oneshot(create_request(
            "PUT",
            &format!("/api/health/{}", entry_id),
            &user.token,
            &update,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["data"]["weight"], 70.2);
    assert_eq!(body["data"]["heartRate"], 72.0);

    // 削除
    let res = app
        .clone()
        .oneshot(create_request(
            "DELETE",
            &format!("/api/health/{}", entry_id),
            &user.token,
            &json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["data"]["message"], "Entry deleted successfully");

    let res = app
        .clone()
        .oneshot(create_request(
            "DELETE",
            &format!("/api/health/{}", entry_id),
            &user.token,
            &json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_entry_validation() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let payload = json!({ "heartRate": 250, "mood": 11 });
    let res = app
        .clone()
        .oneshot(create_request("POST", "/api/health", &user.token, &payload))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert!(body["validation_errors"].get("heart_rate").is_some());
    assert!(body["validation_errors"].get("mood").is_some());
}

#[tokio::test]
async fn test_entries_are_isolated_per_user() {
    let (app, _db) = setup_full_app().await;
    let owner = register_test_user(&app).await;
    let other = register_test_user(&app).await;

    let res = app
        .clone()
        .oneshot(create_request(
            "POST",
            "/api/health",
            &owner.token,
            &json!({ "steps": 9000 }),
        ))
        .await
        .unwrap();
    let entry_id = read_json(res).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let res = app
        .clone()
        .oneshot(create_get_request("/api/health", &other.token))
        .await
        .unwrap();
    let body = read_json(res).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let res = app
        .clone()
        .oneshot(create_request(
            "PUT",
            &format!("/api/health/{}", entry_id),
            &other.token,
            &json!({ "steps": 1 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app
        .clone()
        .oneshot(create_request(
            "DELETE",
            &format!("/api/health/{}", entry_id),
            &other.token,
            &json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_entry_and_bad_id() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let res = app
        .clone()
        .oneshot(create_request(
            "PUT",
            &format!("/api/health/{}", Uuid::new_v4()),
            &user.token,
            &json!({ "sleep": 8 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app
        .clone()
        .oneshot(create_request(
            "PUT",
            "/api/health/not-a-uuid",
            &user.token,
            &json!({ "sleep": 8 }),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
