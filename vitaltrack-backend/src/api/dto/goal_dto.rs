// src/api/dto/goal_dto.rs

use crate::domain::goal_type::GoalType;
use crate::domain::health_goal_model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

fn validate_goal_type(value: &str) -> Result<(), ValidationError> {
    if GoalType::from_str(value).is_some() {
        return Ok(());
    }
    let mut error = ValidationError::new("invalid_goal_type");
    error.message = Some("Goal type must be weight, steps, water or sleep".into());
    Err(error)
}

// --- リクエストDTO ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    #[validate(custom(function = validate_goal_type))]
    pub goal_type: String,

    #[validate(range(min = 0.0, message = "Target value cannot be negative"))]
    pub target_value: f64,

    #[validate(range(min = 0.0, message = "Current value cannot be negative"))]
    pub current_value: Option<f64>,

    pub unit: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalRequest {
    #[validate(custom(function = validate_goal_type))]
    pub goal_type: Option<String>,

    #[validate(range(min = 0.0, message = "Target value cannot be negative"))]
    pub target_value: Option<f64>,

    #[validate(range(min = 0.0, message = "Current value cannot be negative"))]
    pub current_value: Option<f64>,

    pub unit: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub completed: Option<bool>,
}

// --- レスポンスDTO ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub goal_type: String,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub completed: bool,
    pub progress_percent: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<health_goal_model::Model> for GoalDto {
    fn from(model: health_goal_model::Model) -> Self {
        Self {
            progress_percent: model.progress_percent(),
            id: model.id,
            user_id: model.user_id,
            goal_type: model.goal_type,
            target_value: model.target_value,
            current_value: model.current_value,
            unit: model.unit,
            deadline: model.deadline,
            completed: model.completed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
