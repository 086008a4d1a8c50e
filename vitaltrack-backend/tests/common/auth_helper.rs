// tests/common/auth_helper.rs

use axum::{http::StatusCode, Router};
use tower::ServiceExt;
use uuid::Uuid;
use vitaltrack_backend::api::dto::user_dto::RegisterRequest;

use crate::common::request::{create_public_request, read_json};

/// テスト用のユーザー情報
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub token: String,
}

/// テスト用の登録データ
pub fn create_register_request() -> RegisterRequest {
    RegisterRequest {
        name: "Test User".to_string(),
        email: format!("test{}@example.com", Uuid::new_v4().simple()),
        password: "password123".to_string(),
        age: Some(35),
        height: Some(175.0),
        weight: Some(70.0),
        gender: Some("female".to_string()),
        health_goals: vec!["Sleep better".to_string()],
    }
}

/// ユーザー登録を実行し、認証情報を返す
pub async fn register_test_user_with(
    app: &Router,
    request: RegisterRequest,
) -> Result<TestUser, String> {
    let req = create_public_request("POST", "/api/users/register", &request);
    let res = app.clone().oneshot(req).await.unwrap();

    let status = res.status();
    let body = read_json(res).await;
    if status != StatusCode::CREATED {
        return Err(format!("Registration failed ({}): {:?}", status, body));
    }

    Ok(TestUser {
        id: body["user"]["id"].as_str().unwrap().parse().unwrap(),
        email: body["user"]["email"].as_str().unwrap().to_string(),
        name: body["user"]["name"].as_str().unwrap().to_string(),
        token: body["token"].as_str().unwrap().to_string(),
    })
}

pub async fn register_test_user(app: &Router) -> TestUser {
    register_test_user_with(app, create_register_request())
        .await
        .unwrap()
}
