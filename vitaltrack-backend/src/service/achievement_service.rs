// src/service/achievement_service.rs

use crate::api::dto::achievement_dto::{AchievementDto, CreateAchievementRequest};
use crate::db::DbPool;
use crate::error::AppResult;
use crate::repository::achievement_repository::AchievementRepository;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub struct AchievementService {
    repo: Arc<AchievementRepository>,
}

impl AchievementService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(AchievementRepository::new(db_pool)),
        }
    }

    pub async fn list_achievements(&self, user_id: Uuid) -> AppResult<Vec<AchievementDto>> {
        let achievements = self.repo.find_all_for_user(user_id).await?;
        Ok(achievements.into_iter().map(Into::into).collect())
    }

    pub async fn create_achievement(
        &self,
        user_id: Uuid,
        payload: CreateAchievementRequest,
    ) -> AppResult<AchievementDto> {
        payload.validate()?;
        let achievement = self.repo.create_for_user(user_id, payload).await?;
        Ok(achievement.into())
    }
}
