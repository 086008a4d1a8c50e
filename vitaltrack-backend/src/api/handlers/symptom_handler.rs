// src/api/handlers/symptom_handler.rs
use crate::api::dto::symptom_dto::{CreateSymptomRequest, SymptomDto, UpdateSymptomRequest};
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

pub async fn list_symptoms_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<ApiResponse<Vec<SymptomDto>>> {
    let items = app_state.symptom_service.list_symptoms(user.user_id()).await?;
    info!(user_id = %user.user_id(), count = items.len(), "Listed symptoms");
    Ok(ApiResponse::success(items))
}

pub async fn create_symptom_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateSymptomRequest>,
) -> AppResult<impl IntoResponse> {
    let created = app_state.symptom_service.create_symptom(user.user_id(), payload).await?;
    info!(user_id = %user.user_id(), id = %created.id, "Created symptom");
    Ok((StatusCode::CREATED, ApiResponse::success(created)))
}

pub async fn update_symptom_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateSymptomRequest>,
) -> AppResult<ApiResponse<SymptomDto>> {
    let updated = app_state.symptom_service.update_symptom(user.user_id(), id, payload).await?;
    info!(user_id = %user.user_id(), id = %id, "Updated symptom");
    Ok(ApiResponse::success(updated))
}

pub async fn delete_symptom_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<MessageResponse>> {
    let message = app_state.symptom_service.delete_symptom(user.user_id(), id).await?;
    info!(user_id = %user.user_id(), id = %id, "Deleted symptom");
    Ok(ApiResponse::success(message))
}

pub fn symptom_router(app_state: AppState) -> Router {
    Router::new()
        .route("/symptoms", get(list_symptoms_handler).post(create_symptom_handler))
        .route(
            "/symptoms/{id}",
            put(update_symptom_handler).delete(delete_symptom_handler),
        )
        .with_state(app_state)
}
