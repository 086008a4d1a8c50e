// src/repository/user_repository.rs

use crate::api::dto::user_dto::UpdateProfileRequest;
use crate::domain::user_model::{self, ActiveModel as UserActiveModel, Entity as UserEntity};
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, PaginatorTrait, QueryFilter, Set};
use uuid::Uuid;

/// 登録時に保存する値
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub age: Option<i32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub gender: Option<String>,
    pub health_goals: Vec<String>,
}

#[derive(Debug)]
pub struct UserRepository {
    db: DbConn,
}

impl UserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<user_model::Model>, DbErr> {
        UserEntity::find_by_id(id).one(&self.db).await
    }

    /// メールアドレスは小文字で保存されている前提
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user_model::Model>, DbErr> {
        UserEntity::find()
            .filter(user_model::Column::Email.eq(email.to_lowercase()))
            .one(&self.db)
            .await
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = UserEntity::find()
            .filter(user_model::Column::Email.eq(email.to_lowercase()))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    pub async fn create(&self, payload: CreateUser) -> Result<user_model::Model, DbErr> {
        let new_user = UserActiveModel {
            name: Set(payload.name.trim().to_string()),
            email: Set(payload.email.trim().to_lowercase()),
            password_hash: Set(payload.password_hash),
            age: Set(payload.age),
            height: Set(payload.height),
            weight: Set(payload.weight),
            gender: Set(payload.gender),
            health_goals: Set(serde_json::json!(payload.health_goals)),
            ..Default::default()
        };
        new_user.insert(&self.db).await
    }

    pub async fn update_profile(
        &self,
        id: Uuid,
        payload: UpdateProfileRequest,
    ) -> Result<Option<user_model::Model>, DbErr> {
        let user = match UserEntity::find_by_id(id).one(&self.db).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        let mut active_model: UserActiveModel = user.clone().into();
        let mut changed = false;

        if let Some(name) = payload.name {
            active_model.name = Set(name.trim().to_string());
            changed = true;
        }
        if payload.age.is_some() {
            active_model.age = Set(payload.age);
            changed = true;
        }
        if payload.height.is_some() {
            active_model.height = Set(payload.height);
            changed = true;
        }
        if payload.weight.is_some() {
            active_model.weight = Set(payload.weight);
            changed = true;
        }
        if payload.gender.is_some() {
            active_model.gender = Set(payload.gender);
            changed = true;
        }
        if let Some(goals) = payload.health_goals {
            active_model.health_goals = Set(serde_json::json!(goals));
            changed = true;
        }
        if let Some(preferences) = payload.notification_preferences {
            active_model.notification_preferences = Set(serde_json::to_value(preferences)
                .map_err(|e| DbErr::Custom(format!("notification preferences: {}", e)))?);
            changed = true;
        }

        if changed {
            Ok(Some(active_model.update(&self.db).await?))
        } else {
            Ok(Some(user))
        }
    }

    pub async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: String,
    ) -> Result<Option<user_model::Model>, DbErr> {
        let user = match UserEntity::find_by_id(id).one(&self.db).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        let mut active_model: UserActiveModel = user.into();
        active_model.password_hash = Set(password_hash);
        Ok(Some(active_model.update(&self.db).await?))
    }
}
