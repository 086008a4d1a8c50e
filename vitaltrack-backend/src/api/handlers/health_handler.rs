// src/api/handlers/health_handler.rs
use crate::api::dto::health_dto::{HealthEntryDto, HealthEntryRequest};
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

/// バイタル記録一覧（新しい順）
pub async fn list_entries_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<ApiResponse<Vec<HealthEntryDto>>> {
    let entries = app_state
        .health_entry_service
        .list_entries(user.user_id())
        .await?;

    info!(user_id = %user.user_id(), count = entries.len(), "Listed health entries");
    Ok(ApiResponse::success(entries))
}

pub async fn create_entry_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<HealthEntryRequest>,
) -> AppResult<impl IntoResponse> {
    info!(user_id = %user.user_id(), "Creating health entry");

    let entry = app_state
        .health_entry_service
        .create_entry(user.user_id(), payload)
        .await?;

    info!(user_id = %user.user_id(), entry_id = %entry.id, "Health entry created");
    Ok((StatusCode::CREATED, ApiResponse::success(entry)))
}

pub async fn update_entry_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<HealthEntryRequest>,
) -> AppResult<ApiResponse<HealthEntryDto>> {
    let entry = app_state
        .health_entry_service
        .update_entry(user.user_id(), id, payload)
        .await?;

    info!(user_id = %user.user_id(), entry_id = %id, "Health entry updated");
    Ok(ApiResponse::success(entry))
}

pub async fn delete_entry_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<MessageResponse>> {
    let message = app_state
        .health_entry_service
        .delete_entry(user.user_id(), id)
        .await?;

    info!(user_id = %user.user_id(), entry_id = %id, "Health entry deleted");
    Ok(ApiResponse::success(message))
}

pub fn health_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(list_entries_handler).post(create_entry_handler))
        .route(
            "/health/{id}",
            put(update_entry_handler).delete(delete_entry_handler),
        )
        .with_state(app_state)
}
