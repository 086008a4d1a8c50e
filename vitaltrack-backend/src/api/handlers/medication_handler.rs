// src/api/handlers/medication_handler.rs
use crate::api::dto::medication_dto::{
    CreateMedicationRequest, LogMedicationRequest, MedicationDto, UpdateMedicationRequest,
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
    routing::{get, post, put},
    Router,
};
use tracing::info;

pub async fn list_medications_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<ApiResponse<Vec<MedicationDto>>> {
    let medications = app_state
        .medication_service
        .list_medications(user.user_id())
        .await?;
    Ok(ApiResponse::success(medications))
}

pub async fn create_medication_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateMedicationRequest>,
) -> AppResult<impl IntoResponse> {
    let medication = app_state
        .medication_service
        .create_medication(user.user_id(), payload)
        .await?;

    info!(
        user_id = %user.user_id(),
        medication_id = %medication.id,
        name = %medication.name,
        "Medication created"
    );
    Ok((StatusCode::CREATED, ApiResponse::success(medication)))
}

/// 服薬ログを追記
pub async fn log_medication_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<LogMedicationRequest>,
) -> AppResult<ApiResponse<MedicationDto>> {
    let taken = payload.taken;
    let medication = app_state
        .medication_service
        .log_intake(user.user_id(), id, payload)
        .await?;

    info!(
        user_id = %user.user_id(),
        medication_id = %id,
        taken = taken,
        "Medication intake logged"
    );
    Ok(ApiResponse::success(medication))
}

pub async fn update_medication_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateMedicationRequest>,
) -> AppResult<ApiResponse<MedicationDto>> {
    let medication = app_state
        .medication_service
        .update_medication(user.user_id(), id, payload)
        .await?;

    info!(user_id = %user.user_id(), medication_id = %id, "Medication updated");
    Ok(ApiResponse::success(medication))
}

pub async fn delete_medication_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<MessageResponse>> {
    let message = app_state
        .medication_service
        .delete_medication(user.user_id(), id)
        .await?;

    info!(user_id = %user.user_id(), medication_id = %id, "Medication deleted");
    Ok(ApiResponse::success(message))
}

pub fn medication_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/medications",
            get(list_medications_handler).post(create_medication_handler),
        )
        .route("/medications/{id}/log", post(log_medication_handler))
        .route(
            "/medications/{id}",
            put(update_medication_handler).delete(delete_medication_handler),
        )
        .with_state(app_state)
}
