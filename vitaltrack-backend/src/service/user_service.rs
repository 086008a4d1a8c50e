// src/service/user_service.rs

use crate::api::dto::user_dto::{UpdateProfileRequest, UserResponse};
use crate::error::{AppError, AppResult};
use crate::repository::user_repository::UserRepository;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn get_profile(&self, user_id: Uuid) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        Ok(user.into())
    }

    pub async fn update_profile(
        &self,
        user_id: Uuid,
        payload: UpdateProfileRequest,
    ) -> AppResult<UserResponse> {
        payload.validate()?;

        let user = self
            .user_repo
            .update_profile(user_id, payload)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        Ok(user.into())
    }
}
