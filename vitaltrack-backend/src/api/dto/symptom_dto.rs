// src/api/dto/symptom_dto.rs

use crate::domain::symptom_model;
use crate::utils::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- リクエストDTO ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSymptomRequest {
    pub date: Option<DateTime<Utc>>,

    #[validate(custom(function = validation::validate_symptom_list))]
    pub symptoms: Vec<String>,

    #[validate(range(min = 1, max = 10, message = "Severity must be between 1 and 10"))]
    pub severity: i32,

    #[validate(range(min = 1, max = 10, message = "Stress level must be between 1 and 10"))]
    pub stress_level: Option<i32>,

    pub description: Option<String>,

    #[validate(length(max = 100, message = "Duration must not exceed 100 characters"))]
    pub duration: Option<String>,

    pub action_taken: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSymptomRequest {
    pub date: Option<DateTime<Utc>>,

    #[validate(custom(function = validation::validate_symptom_list))]
    pub symptoms: Option<Vec<String>>,

    #[validate(range(min = 1, max = 10, message = "Severity must be between 1 and 10"))]
    pub severity: Option<i32>,

    #[validate(range(min = 1, max = 10, message = "Stress level must be between 1 and 10"))]
    pub stress_level: Option<i32>,

    pub description: Option<String>,

    #[validate(length(max = 100, message = "Duration must not exceed 100 characters"))]
    pub duration: Option<String>,

    pub action_taken: Option<String>,
}

// --- レスポンスDTO ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    pub symptoms: Vec<String>,
    pub severity: i32,
    pub stress_level: Option<i32>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub action_taken: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<symptom_model::Model> for SymptomDto {
    fn from(model: symptom_model::Model) -> Self {
        Self {
            symptoms: model.symptom_list(),
            id: model.id,
            user_id: model.user_id,
            date: model.date,
            severity: model.severity,
            stress_level: model.stress_level,
            description: model.description,
            duration: model.duration,
            action_taken: model.action_taken,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
