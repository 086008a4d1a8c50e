// src/service/goal_service.rs

use crate::api::dto::goal_dto::{CreateGoalRequest, GoalDto, UpdateGoalRequest};
use crate::api::dto::MessageResponse;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::repository::health_goal_repository::HealthGoalRepository;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub struct GoalService {
    repo: Arc<HealthGoalRepository>,
}

impl GoalService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(HealthGoalRepository::new(db_pool)),
        }
    }

    pub async fn list_goals(&self, user_id: Uuid) -> AppResult<Vec<GoalDto>> {
        let goals = self.repo.find_all_for_user(user_id).await?;
        Ok(goals.into_iter().map(Into::into).collect())
    }

    pub async fn create_goal(&self, user_id: Uuid, payload: CreateGoalRequest) -> AppResult<GoalDto> {
        payload.validate()?;
        let goal = self.repo.create_for_user(user_id, payload).await?;
        Ok(goal.into())
    }

    pub async fn update_goal(
        &self,
        user_id: Uuid,
        id: Uuid,
        payload: UpdateGoalRequest,
    ) -> AppResult<GoalDto> {
        payload.validate()?;
        self.repo
            .update_for_user(user_id, id, payload)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Goal not found".to_string()))
    }

    pub async fn delete_goal(&self, user_id: Uuid, id: Uuid) -> AppResult<MessageResponse> {
        let result = self.repo.delete_for_user(user_id, id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Goal not found".to_string()));
        }
        Ok(MessageResponse::new("Goal deleted"))
    }
}
