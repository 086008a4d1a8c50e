// src/api/handlers/user_handler.rs
use crate::api::dto::user_dto::{
    AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateProfileRequest,
    UserResponse,
};
use crate::api::dto::MessageResponse;
use crate::api::{AppState, CookieConfig};
use crate::error::AppResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::types::ApiResponse;
use crate::utils::email::mask_email;
use axum::{
    extract::{Json, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use tracing::info;

/// アクセストークンを Cookie にも載せる
fn with_auth_cookie(mut response: Response, token: &str, config: &CookieConfig) -> Response {
    let cookie = Cookie::build((config.access_token_name.clone(), token.to_string()))
        .path(config.path.clone())
        .secure(config.secure)
        .http_only(config.http_only)
        .same_site(SameSite::Strict)
        .build();

    if let Ok(value) = HeaderValue::from_str(&cookie.to_string()) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

pub async fn register_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    info!(email = %mask_email(&payload.email), "User registration attempt");

    let auth_response: AuthResponse = app_state.auth_service.register(payload).await?;

    info!(user_id = %auth_response.user.id, "User registered successfully");

    let response = (StatusCode::CREATED, Json(&auth_response)).into_response();
    Ok(with_auth_cookie(
        response,
        &auth_response.token,
        &app_state.cookie_config,
    ))
}

pub async fn login_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    info!(email = %mask_email(&payload.email), "User login attempt");

    let auth_response = app_state.auth_service.login(payload).await?;

    info!(user_id = %auth_response.user.id, "User logged in successfully");

    let response = Json(&auth_response).into_response();
    Ok(with_auth_cookie(
        response,
        &auth_response.token,
        &app_state.cookie_config,
    ))
}

pub async fn get_profile_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<ApiResponse<UserResponse>> {
    let profile = app_state.user_service.get_profile(user.user_id()).await?;
    Ok(ApiResponse::success(profile))
}

pub async fn update_profile_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<ApiResponse<UserResponse>> {
    info!(user_id = %user.user_id(), "Updating user profile");

    let profile = app_state
        .user_service
        .update_profile(user.user_id(), payload)
        .await?;

    info!(user_id = %user.user_id(), "User profile updated");
    Ok(ApiResponse::success(profile))
}

pub async fn change_password_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Json(payload): Json<ChangePasswordRequest>,
) -> AppResult<ApiResponse<MessageResponse>> {
    info!(user_id = %user.user_id(), "Password change attempt");

    app_state
        .auth_service
        .change_password(user.user_id(), payload)
        .await?;

    info!(user_id = %user.user_id(), "Password changed");
    Ok(ApiResponse::success(MessageResponse::new(
        "Password updated successfully",
    )))
}

pub fn user_router(app_state: AppState) -> Router {
    Router::new()
        .route("/users/register", post(register_handler))
        .route("/users/login", post(login_handler))
        .route(
            "/users/profile",
            get(get_profile_handler).put(update_profile_handler),
        )
        .route("/users/change-password", put(change_password_handler))
        .with_state(app_state)
}
