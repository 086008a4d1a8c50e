// src/domain/achievement_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// 実績（作成後は変更しない）
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "achievements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(nullable)]
    pub badge_icon: Option<String>,

    pub achievement_type: String,

    pub unlocked_date: DateTime<Utc>,

    /// AchievementProgress
    #[sea_orm(column_type = "Json", nullable)]
    pub progress: Option<Json>,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_model::Entity",
        from = "Column::UserId",
        to = "super::user_model::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            unlocked_date: Set(Utc::now()),
            created_at: Set(Utc::now()),
            ..ActiveModelTrait::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AchievementProgress {
    pub current: f64,
    pub target: f64,
}

impl Model {
    pub fn progress(&self) -> Option<AchievementProgress> {
        self.progress
            .clone()
            .and_then(|value| serde_json::from_value(value).ok())
    }
}
