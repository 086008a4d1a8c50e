// src/api/handlers/achievement_handler.rs
use crate::api::dto::achievement_dto::{AchievementDto, CreateAchievementRequest};
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::types::ApiResponse;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::info;

pub async fn list_achievements_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<ApiResponse<Vec<AchievementDto>>> {
    let achievements = app_state
        .achievement_service
        .list_achievements(user.user_id())
        .await?;
    Ok(ApiResponse::success(achievements))
}

pub async fn create_achievement_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateAchievementRequest>,
) -> AppResult<impl IntoResponse> {
    let achievement = app_state
        .achievement_service
        .create_achievement(user.user_id(), payload)
        .await?;

    info!(
        user_id = %user.user_id(),
        achievement_id = %achievement.id,
        "Achievement unlocked"
    );
    Ok((StatusCode::CREATED, ApiResponse::success(achievement)))
}

pub fn achievement_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/achievements",
            get(list_achievements_handler).post(create_achievement_handler),
        )
        .with_state(app_state)
}
