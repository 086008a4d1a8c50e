// tests/integration/system_tests.rs

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

use crate::common::{app_helper::setup_full_app, request::read_json};

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_root_and_health_check() {
    let (app, _db) = setup_full_app().await;

    let res = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["x-content-type-options"], "nosniff");
    assert_eq!(res.headers()["x-frame-options"], "DENY");
    let body = read_json(res).await;
    assert_eq!(body["message"], "VitalTrack API Server");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["status"], "running");

    let res = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    assert_eq!(body["status"], "OK");
    assert!(body["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let (app, _db) = setup_full_app().await;

    let res = app.clone().oneshot(get("/api/does-not-exist")).await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = read_json(res).await;
    assert_eq!(body["error"], "Route not found");
}

#[tokio::test]
async fn test_cors_preflight_for_allowed_origin() {
    let (app, _db) = setup_full_app().await;

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/api/health")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();

    assert_eq!(
        res.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
}
