// src/api/handlers/goal_handler.rs
use crate::api::dto::goal_dto::{CreateGoalRequest, GoalDto, UpdateGoalRequest};
use crate::api::dto::MessageResponse;
use crate::api::handlers::UuidPath;
use crate::api::AppState;
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::types::ApiResponse;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Router,
};
use tracing::info;

/// 目標一覧（進捗率付き）
pub async fn list_goals_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<ApiResponse<Vec<GoalDto>>> {
    let items = app_state.goal_service.list_goals(user.user_id()).await?;
    info!(user_id = %user.user_id(), count = items.len(), "Listed goals");
    Ok(ApiResponse::success(items))
}

pub async fn create_goal_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateGoalRequest>,
) -> AppResult<impl IntoResponse> {
    let created = app_state.goal_service.create_goal(user.user_id(), payload).await?;
    info!(user_id = %user.user_id(), id = %created.id, "Created goal");
    Ok((StatusCode::CREATED, ApiResponse::success(created)))
}

pub async fn update_goal_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateGoalRequest>,
) -> AppResult<ApiResponse<GoalDto>> {
    let updated = app_state.goal_service.update_goal(user.user_id(), id, payload).await?;
    info!(user_id = %user.user_id(), id = %id, "Updated goal");
    Ok(ApiResponse::success(updated))
}

pub async fn delete_goal_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<MessageResponse>> {
    let message = app_state.goal_service.delete_goal(user.user_id(), id).await?;
    info!(user_id = %user.user_id(), id = %id, "Deleted goal");
    Ok(ApiResponse::success(message))
}

pub fn goal_router(app_state: AppState) -> Router {
    Router::new()
        .route("/goals", get(list_goals_handler).post(create_goal_handler))
        .route(
            "/goals/{id}",
            put(update_goal_handler).delete(delete_goal_handler),
        )
        .with_state(app_state)
}
