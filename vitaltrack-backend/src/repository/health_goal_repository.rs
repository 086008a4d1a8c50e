// src/repository/health_goal_repository.rs

use crate::api::dto::goal_dto::{CreateGoalRequest, UpdateGoalRequest};
use crate::domain::health_goal_model::{
    self, ActiveModel as HealthGoalActiveModel, Entity as HealthGoalEntity,
};
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Set};
use uuid::Uuid;

pub struct HealthGoalRepository {
    db: DbConn,
}

impl HealthGoalRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id_for_user(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<health_goal_model::Model>, DbErr> {
        HealthGoalEntity::find_by_id(id)
            .filter(health_goal_model::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    pub async fn find_all_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<health_goal_model::Model>, DbErr> {
        HealthGoalEntity::find()
            .filter(health_goal_model::Column::UserId.eq(user_id))
            .order_by_desc(health_goal_model::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    pub async fn create_for_user(
        &self,
        user_id: Uuid,
        payload: CreateGoalRequest,
    ) -> Result<health_goal_model::Model, DbErr> {
        let new_goal = HealthGoalActiveModel {
            user_id: Set(user_id),
            goal_type: Set(payload.goal_type),
            target_value: Set(payload.target_value),
            current_value: Set(payload.current_value.unwrap_or(0.0)),
            unit: Set(payload.unit),
            deadline: Set(payload.deadline),
            ..Default::default()
        };
        new_goal.insert(&self.db).await
    }

    pub async fn update_for_user(
        &self,
        user_id: Uuid,
        id: Uuid,
        payload: UpdateGoalRequest,
    ) -> Result<Option<health_goal_model::Model>, DbErr> {
        let goal = match self.find_by_id_for_user(user_id, id).await? {
            Some(g) => g,
            None => return Ok(None),
        };

        let mut active_model: HealthGoalActiveModel = goal.clone().into();
        let mut changed = false;

        if let Some(goal_type) = payload.goal_type {
            active_model.goal_type = Set(goal_type);
            changed = true;
        }
        if let Some(target_value) = payload.target_value {
            active_model.target_value = Set(target_value);
            changed = true;
        }
        if let Some(current_value) = payload.current_value {
            active_model.current_value = Set(current_value);
            changed = true;
        }
        if payload.unit.is_some() {
            active_model.unit = Set(payload.unit);
            changed = true;
        }
        if payload.deadline.is_some() {
            active_model.deadline = Set(payload.deadline);
            changed = true;
        }
        if let Some(completed) = payload.completed {
            active_model.completed = Set(completed);
            changed = true;
        }

        if changed {
            Ok(Some(active_model.update(&self.db).await?))
        } else {
            Ok(Some(goal))
        }
    }

    pub async fn delete_for_user(&self, user_id: Uuid, id: Uuid) -> Result<DeleteResult, DbErr> {
        HealthGoalEntity::delete_many()
            .filter(health_goal_model::Column::Id.eq(id))
            .filter(health_goal_model::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
    }
}
