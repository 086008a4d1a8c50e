// src/repository/achievement_repository.rs

use crate::api::dto::achievement_dto::CreateAchievementRequest;
use crate::domain::achievement_model::{
    self, ActiveModel as AchievementActiveModel, Entity as AchievementEntity,
};
use sea_orm::{entity::*, query::*, DbConn, DbErr, Set};
use uuid::Uuid;

pub struct AchievementRepository {
    db: DbConn,
}

impl AchievementRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// 獲得日の新しい順
    pub async fn find_all_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<achievement_model::Model>, DbErr> {
        AchievementEntity::find()
            .filter(achievement_model::Column::UserId.eq(user_id))
            .order_by_desc(achievement_model::Column::UnlockedDate)
            .all(&self.db)
            .await
    }

    pub async fn create_for_user(
        &self,
        user_id: Uuid,
        payload: CreateAchievementRequest,
    ) -> Result<achievement_model::Model, DbErr> {
        let progress = payload
            .progress
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| DbErr::Custom(format!("achievement progress: {}", e)))?;

        let mut new_achievement = AchievementActiveModel {
            user_id: Set(user_id),
            title: Set(payload.title),
            description: Set(payload.description),
            badge_icon: Set(payload.badge_icon),
            achievement_type: Set(payload.achievement_type),
            progress: Set(progress),
            ..Default::default()
        };
        if let Some(unlocked_date) = payload.unlocked_date {
            new_achievement.unlocked_date = Set(unlocked_date);
        }
        new_achievement.insert(&self.db).await
    }
}
