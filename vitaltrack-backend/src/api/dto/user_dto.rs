// src/api/dto/user_dto.rs

use crate::domain::user_model::{self, NotificationPreferences};
use crate::utils::validation::{self, name, password, required};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

fn validate_gender(value: &str) -> Result<(), ValidationError> {
    if crate::domain::gender::Gender::from_str(value).is_some() {
        return Ok(());
    }
    let mut error = ValidationError::new("invalid_gender");
    error.message = Some("Gender must be male, female or other".into());
    Err(error)
}

// --- リクエストDTO ---

/// ユーザー登録リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(
        length(
            min = name::MIN_LENGTH,
            max = name::MAX_LENGTH,
            message = "Name must be between 1 and 100 characters"
        ),
        custom(function = validation::validate_not_blank)
    )]
    pub name: String,

    #[validate(custom(function = validation::validate_email_format))]
    pub email: String,

    #[validate(length(min = password::MIN_LENGTH, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: Option<i32>,

    #[validate(range(min = 50.0, max = 300.0, message = "Height must be between 50 and 300 cm"))]
    pub height: Option<f64>,

    #[validate(range(min = 20.0, max = 500.0, message = "Weight must be between 20 and 500 kg"))]
    pub weight: Option<f64>,

    #[validate(custom(function = validate_gender))]
    pub gender: Option<String>,

    #[serde(default)]
    pub health_goals: Vec<String>,
}

/// ログインリクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = required::MIN_LENGTH, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = required::MIN_LENGTH, message = "Password is required"))]
    pub password: String,
}

/// プロフィール更新リクエスト
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(
        length(
            min = name::MIN_LENGTH,
            max = name::MAX_LENGTH,
            message = "Name must be between 1 and 100 characters"
        ),
        custom(function = validation::validate_not_blank)
    )]
    pub name: Option<String>,

    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: Option<i32>,

    #[validate(range(min = 50.0, max = 300.0, message = "Height must be between 50 and 300 cm"))]
    pub height: Option<f64>,

    #[validate(range(min = 20.0, max = 500.0, message = "Weight must be between 20 and 500 kg"))]
    pub weight: Option<f64>,

    #[validate(custom(function = validate_gender))]
    pub gender: Option<String>,

    pub health_goals: Option<Vec<String>>,

    pub notification_preferences: Option<NotificationPreferences>,
}

/// パスワード変更リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = required::MIN_LENGTH, message = "Current password is required"))]
    pub current_password: String,

    #[validate(length(min = password::MIN_LENGTH, message = "New password must be at least 6 characters"))]
    pub new_password: String,
}

// --- レスポンスDTO ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub gender: Option<String>,
    pub health_goals: Vec<String>,
    pub notification_preferences: NotificationPreferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<user_model::Model> for UserResponse {
    fn from(user: user_model::Model) -> Self {
        Self {
            health_goals: user.health_goal_list(),
            notification_preferences: user.notification_preferences(),
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
            height: user.height,
            weight: user.weight,
            gender: user.gender,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// 登録・ログインのレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
    pub expires_in: i64,
}
