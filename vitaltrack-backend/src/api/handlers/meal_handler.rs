// src/api/handlers/meal_handler.rs
use crate::api::dto::meal_dto::{CreateMealRequest, MealEntryDto, UpdateMealRequest};
use crate::api::dto::MessageResponse;
use crate::api::handlers::UuidPath;
use crate::api::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::types::ApiResponse;
use crate::utils::validation::parse_date_param;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Router,
};
use tracing::{info, warn};

pub async fn list_meals_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<ApiResponse<Vec<MealEntryDto>>> {
    let meals = app_state.meal_service.list_meals(user.user_id()).await?;
    Ok(ApiResponse::success(meals))
}

/// 指定日の食事（YYYY-MM-DD）
pub async fn list_meals_by_date_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(date): Path<String>,
) -> AppResult<ApiResponse<Vec<MealEntryDto>>> {
    let day = parse_date_param(&date).ok_or_else(|| {
        warn!(user_id = %user.user_id(), date = %date, "Invalid meal date parameter");
        AppError::BadRequest("Invalid date format. Use YYYY-MM-DD".to_string())
    })?;

    let meals = app_state
        .meal_service
        .list_meals_on(user.user_id(), day)
        .await?;

    info!(user_id = %user.user_id(), date = %day, count = meals.len(), "Listed meals by date");
    Ok(ApiResponse::success(meals))
}

pub async fn create_meal_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<CreateMealRequest>,
) -> AppResult<impl IntoResponse> {
    let meal = app_state
        .meal_service
        .create_meal(user.user_id(), payload)
        .await?;

    info!(
        user_id = %user.user_id(),
        meal_id = %meal.id,
        calories = meal.total_calories,
        "Meal entry created"
    );
    Ok((StatusCode::CREATED, ApiResponse::success(meal)))
}

pub async fn update_meal_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateMealRequest>,
) -> AppResult<ApiResponse<MealEntryDto>> {
    let meal = app_state
        .meal_service
        .update_meal(user.user_id(), id, payload)
        .await?;

    info!(user_id = %user.user_id(), meal_id = %id, "Meal entry updated");
    Ok(ApiResponse::success(meal))
}

pub async fn delete_meal_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<MessageResponse>> {
    let message = app_state
        .meal_service
        .delete_meal(user.user_id(), id)
        .await?;

    info!(user_id = %user.user_id(), meal_id = %id, "Meal entry deleted");
    Ok(ApiResponse::success(message))
}

pub fn meal_router(app_state: AppState) -> Router {
    Router::new()
        .route("/meals", get(list_meals_handler).post(create_meal_handler))
        .route("/meals/date/{date}", get(list_meals_by_date_handler))
        .route(
            "/meals/{id}",
            put(update_meal_handler).delete(delete_meal_handler),
        )
        .with_state(app_state)
}
