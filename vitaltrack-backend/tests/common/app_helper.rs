// tests/common/app_helper.rs

use axum::Router;
use std::sync::Arc;
use vitaltrack_backend::{
    api::{build_router, AppState},
    config::AppConfig,
    utils::{
        email::{EmailConfig, EmailService},
        jwt::JwtManager,
        password::PasswordManager,
    },
};

use crate::common;

/// テスト用の AppState
pub fn create_test_state(db: &common::db::TestDatabase) -> AppState {
    let app_config = AppConfig::for_testing();

    let password_manager = Arc::new(PasswordManager::new_default().unwrap());
    let jwt_manager = Arc::new(JwtManager::new(app_config.jwt.clone()).unwrap());
    let email_service = Arc::new(
        EmailService::new(EmailConfig {
            development_mode: true,
            ..Default::default()
        })
        .unwrap(),
    );

    AppState::with_config(
        db.connection.clone(),
        password_manager,
        jwt_manager,
        email_service,
        &app_config,
    )
}

/// 全ルート付きアプリのセットアップ
pub async fn setup_full_app() -> (Router, common::db::TestDatabase) {
    common::init_test_env();

    let db = common::db::TestDatabase::new().await;
    let app = build_router(create_test_state(&db));

    (app, db)
}
