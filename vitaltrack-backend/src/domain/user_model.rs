// src/domain/user_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(unique)]
    pub email: String,

    #[serde(skip_serializing)] // パスワードハッシュは絶対にシリアライズしない
    pub password_hash: String,

    #[sea_orm(nullable)]
    pub age: Option<i32>,

    /// cm
    #[sea_orm(nullable)]
    pub height: Option<f64>,

    /// kg
    #[sea_orm(nullable)]
    pub weight: Option<f64>,

    #[sea_orm(nullable)]
    pub gender: Option<String>,

    /// [String]
    #[sea_orm(column_type = "Json")]
    pub health_goals: Json,

    /// NotificationPreferences
    #[sea_orm(column_type = "Json")]
    pub notification_preferences: Json,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::health_entry_model::Entity")]
    HealthEntries,

    #[sea_orm(has_many = "super::meal_entry_model::Entity")]
    MealEntries,

    #[sea_orm(has_many = "super::medication_model::Entity")]
    Medications,

    #[sea_orm(has_many = "super::symptom_model::Entity")]
    Symptoms,

    #[sea_orm(has_many = "super::health_goal_model::Entity")]
    HealthGoals,

    #[sea_orm(has_many = "super::doctor_note_model::Entity")]
    DoctorNotes,

    #[sea_orm(has_many = "super::achievement_model::Entity")]
    Achievements,
}

impl Related<super::health_entry_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HealthEntries.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            health_goals: Set(serde_json::json!([])),
            notification_preferences: Set(
                serde_json::to_value(NotificationPreferences::default())
                    .unwrap_or_else(|_| serde_json::json!({})),
            ),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
            ..ActiveModelTrait::default()
        }
    }

    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.updated_at = Set(Utc::now());
        }
        Ok(self)
    }
}

/// 通知設定
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    #[serde(default = "default_true")]
    pub email_notifications: bool,
    #[serde(default = "default_true")]
    pub weekly_reports: bool,
    #[serde(default = "default_true")]
    pub alert_thresholds: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            weekly_reports: true,
            alert_thresholds: true,
        }
    }
}

impl Model {
    pub fn health_goal_list(&self) -> Vec<String> {
        serde_json::from_value(self.health_goals.clone()).unwrap_or_default()
    }

    pub fn notification_preferences(&self) -> NotificationPreferences {
        serde_json::from_value(self.notification_preferences.clone()).unwrap_or_default()
    }
}

/// JWT に埋め込むユーザー情報
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&Model> for UserClaims {
    fn from(user: &Model) -> Self {
        Self {
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}
