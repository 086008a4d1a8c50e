// src/service/auth_service.rs

use crate::api::dto::user_dto::{
    AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest, UserResponse,
};
use crate::domain::user_model::{self, UserClaims};
use crate::error::{AppError, AppResult};
use crate::repository::user_repository::{CreateUser, UserRepository};
use crate::utils::email::{mask_email, EmailService};
use crate::utils::jwt::JwtManager;
use crate::utils::password::{PasswordError, PasswordManager};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

/// 認証サービス
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    password_manager: Arc<PasswordManager>,
    jwt_manager: Arc<JwtManager>,
    email_service: Arc<EmailService>,
}

fn password_error(e: PasswordError) -> AppError {
    match e {
        PasswordError::WeakPassword(message) => AppError::ValidationError(message),
        other => {
            error!(error = %other, "Password hashing failed");
            AppError::InternalServerError("Password processing failed".to_string())
        }
    }
}

impl AuthService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        password_manager: Arc<PasswordManager>,
        jwt_manager: Arc<JwtManager>,
        email_service: Arc<EmailService>,
    ) -> Self {
        Self {
            user_repo,
            password_manager,
            jwt_manager,
            email_service,
        }
    }

    /// ユーザー登録
    pub async fn register(&self, payload: RegisterRequest) -> AppResult<AuthResponse> {
        payload.validate()?;

        if self.user_repo.email_exists(&payload.email).await? {
            warn!(email = %mask_email(&payload.email), "Registration with existing email");
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let password_hash = self
            .password_manager
            .hash_password(&payload.password)
            .map_err(password_error)?;

        let user = self
            .user_repo
            .create(CreateUser {
                name: payload.name,
                email: payload.email,
                password_hash,
                age: payload.age,
                height: payload.height,
                weight: payload.weight,
                gender: payload.gender,
                health_goals: payload.health_goals,
            })
            .await?;

        info!(user_id = %user.id, email = %mask_email(&user.email), "User registered");

        // メール送信の失敗は登録を失敗させない
        if let Err(e) = self
            .email_service
            .send_welcome_email(&user.email, &user.name)
            .await
        {
            error!(user_id = %user.id, error = %e, "Failed to send welcome email");
        }

        self.auth_response(user)
    }

    /// ログイン
    pub async fn login(&self, payload: LoginRequest) -> AppResult<AuthResponse> {
        payload.validate()?;

        let user = self
            .user_repo
            .find_by_email(payload.email.trim())
            .await?
            .ok_or_else(|| {
                warn!(email = %mask_email(&payload.email), "Login attempt for unknown email");
                AppError::Unauthorized("Invalid credentials".to_string())
            })?;

        let is_valid = self
            .password_manager
            .verify_password(&payload.password, &user.password_hash)
            .map_err(|e| {
                error!(user_id = %user.id, error = %e, "Password verification failed");
                AppError::InternalServerError("Authentication failed".to_string())
            })?;

        if !is_valid {
            warn!(user_id = %user.id, "Login attempt with incorrect password");
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        info!(user_id = %user.id, "User logged in");
        self.auth_response(user)
    }

    /// パスワード変更
    pub async fn change_password(
        &self,
        user_id: Uuid,
        payload: ChangePasswordRequest,
    ) -> AppResult<()> {
        payload.validate()?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let is_valid = self
            .password_manager
            .verify_password(&payload.current_password, &user.password_hash)
            .map_err(|e| {
                error!(user_id = %user.id, error = %e, "Password verification failed");
                AppError::InternalServerError("Authentication failed".to_string())
            })?;

        if !is_valid {
            warn!(user_id = %user.id, "Password change with incorrect current password");
            return Err(AppError::Unauthorized(
                "Current password is incorrect".to_string(),
            ));
        }

        let new_hash = self
            .password_manager
            .hash_password(&payload.new_password)
            .map_err(password_error)?;

        self.user_repo
            .update_password_hash(user_id, new_hash)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        info!(user_id = %user_id, "Password changed");
        Ok(())
    }

    fn auth_response(&self, user: user_model::Model) -> AppResult<AuthResponse> {
        let token = self
            .jwt_manager
            .generate_access_token(UserClaims::from(&user))
            .map_err(|e| {
                error!(user_id = %user.id, error = %e, "Failed to issue access token");
                AppError::InternalServerError("Failed to issue token".to_string())
            })?;

        Ok(AuthResponse {
            token,
            expires_in: self.jwt_manager.access_token_expiry_seconds(),
            user: UserResponse::from(user),
        })
    }
}
