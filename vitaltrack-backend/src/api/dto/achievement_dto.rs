// src/api/dto/achievement_dto.rs

use crate::domain::achievement_model::{self, AchievementProgress};
use crate::domain::achievement_type::AchievementType;
use crate::utils::validation::required;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

fn validate_achievement_type(value: &str) -> Result<(), ValidationError> {
    if AchievementType::from_str(value).is_some() {
        return Ok(());
    }
    let mut error = ValidationError::new("invalid_achievement_type");
    error.message = Some("Achievement type must be streak, milestone or consistency".into());
    Err(error)
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAchievementRequest {
    #[validate(length(min = required::MIN_LENGTH, max = 255, message = "Title is required"))]
    pub title: String,

    pub description: Option<String>,
    pub badge_icon: Option<String>,

    #[validate(custom(function = validate_achievement_type))]
    pub achievement_type: String,

    pub unlocked_date: Option<DateTime<Utc>>,
    pub progress: Option<AchievementProgress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub badge_icon: Option<String>,
    pub achievement_type: String,
    pub unlocked_date: DateTime<Utc>,
    pub progress: Option<AchievementProgress>,
    pub created_at: DateTime<Utc>,
}

impl From<achievement_model::Model> for AchievementDto {
    fn from(model: achievement_model::Model) -> Self {
        Self {
            progress: model.progress(),
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            badge_icon: model.badge_icon,
            achievement_type: model.achievement_type,
            unlocked_date: model.unlocked_date,
            created_at: model.created_at,
        }
    }
}
