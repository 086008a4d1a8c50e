// src/api/handlers/doctor_note_handler.rs
use crate::api::dto::doctor_note_dto::{
    CreateDoctorNoteRequest, DoctorNoteDto, UpdateDoctorNoteRequest,
};
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

pub async fn list_notes_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<ApiResponse<Vec<DoctorNoteDto>>> {
    let items = app_state.doctor_note_service.list_notes(user.user_id()).await?;
    info!(user_id = %user.user_id(), count = items.len(), "Listed doctor notes");
    Ok(ApiResponse::success(items))
}

pub async fn create_note_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateDoctorNoteRequest>,
) -> AppResult<impl IntoResponse> {
    let created = app_state.doctor_note_service.create_note(user.user_id(), payload).await?;
    info!(user_id = %user.user_id(), id = %created.id, "Created doctor note");
    Ok((StatusCode::CREATED, ApiResponse::success(created)))
}

pub async fn update_note_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateDoctorNoteRequest>,
) -> AppResult<ApiResponse<DoctorNoteDto>> {
    let updated = app_state.doctor_note_service.update_note(user.user_id(), id, payload).await?;
    info!(user_id = %user.user_id(), id = %id, "Updated doctor note");
    Ok(ApiResponse::success(updated))
}

pub async fn delete_note_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<MessageResponse>> {
    let message = app_state.doctor_note_service.delete_note(user.user_id(), id).await?;
    info!(user_id = %user.user_id(), id = %id, "Deleted doctor note");
    Ok(ApiResponse::success(message))
}

pub fn doctor_note_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/doctor-notes",
            get(list_notes_handler).post(create_note_handler),
        )
        .route(
            "/doctor-notes/{id}",
            put(update_note_handler).delete(delete_note_handler),
        )
        .with_state(app_state)
}
