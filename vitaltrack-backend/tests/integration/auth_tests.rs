// tests/integration/auth_tests.rs

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;
use vitaltrack_backend::api::dto::user_dto::LoginRequest;

use crate::common::{
    app_helper::setup_full_app,
    auth_helper::{create_register_request, register_test_user, register_test_user_with},
    request::{create_get_request, create_public_request, create_request, read_json},
};

#[tokio::test]
async fn test_register_returns_token_and_cookie() {
    let (app, _db) = setup_full_app().await;
    let request = create_register_request();

    let req = create_public_request("POST", "/api/users/register", &request);
    let res = app.clone().oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(cookie.contains("HttpOnly"));

    let body = read_json(res).await;
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["email"], request.email.as_str());
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let (app, _db) = setup_full_app().await;
    let request = create_register_request();
    register_test_user_with(&app, request.clone()).await.unwrap();

    let req = create_public_request("POST", "/api/users/register", &request);
    let res = app.clone().oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = read_json(res).await;
    assert_eq!(body["message"], "User already exists");
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let (app, _db) = setup_full_app().await;
    let mut request = create_register_request();
    request.password = "12345".to_string();

    let req = create_public_request("POST", "/api/users/register", &request);
    let res = app.clone().oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = read_json(res).await;
    assert!(body["validation_errors"].get("password").is_some());
}

#[tokio::test]
async fn test_login_success_and_failure() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let login = LoginRequest {
        email: user.email.clone(),
        password: "password123".to_string(),
    };
    let res = app
        .clone()
        .oneshot(create_public_request("POST", "/api/users/login", &login))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["id"], user.id.to_string());

    let wrong = LoginRequest {
        email: user.email,
        password: "wrong-password".to_string(),
    };
    let res = app
        .clone()
        .oneshot(create_public_request("POST", "/api/users/login", &wrong))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = read_json(res).await;
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let (app, _db) = setup_full_app().await;

    let req = Request::builder()
        .uri("/api/users/profile")
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = read_json(res).await;
    assert_eq!(body["message"], "No token, authorization denied");

    let res = app
        .clone()
        .oneshot(create_get_request("/api/users/profile", "not-a-jwt"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_cookie_token_is_accepted() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let req = Request::builder()
        .uri("/api/users/profile")
        .header(header::COOKIE, format!("access_token={}", user.token))
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["data"]["email"], user.email.as_str());
}

#[tokio::test]
async fn test_profile_update_and_password_change() {
    let (app, _db) = setup_full_app().await;
    let user = register_test_user(&app).await;

    let update = json!({ "name": "Renamed User", "weight": 68.5 });
    let res = app
        .clone()
        .oneshot(create_request("PUT", "/api/users/profile", &user.token, &update))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Renamed User");
    assert_eq!(body["data"]["weight"], 68.5);

    let change = json!({ "currentPassword": "password123", "newPassword": "newpassword456" });
    let res = app
        .clone()
        .oneshot(create_request("PUT", "/api/users/change-password", &user.token, &change))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let login = LoginRequest {
        email: user.email,
        password: "newpassword456".to_string(),
    };
    let res = app
        .clone()
        .oneshot(create_public_request("POST", "/api/users/login", &login))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
