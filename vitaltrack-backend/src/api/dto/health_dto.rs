// src/api/dto/health_dto.rs

use crate::domain::health_entry_model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- リクエストDTO ---

/// 作成・更新共通。省略したメトリクスは未記録（更新時は変更なし）
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HealthEntryRequest {
    pub date: Option<DateTime<Utc>>,

    #[validate(range(min = 40.0, max = 200.0, message = "Heart rate must be between 40 and 200 bpm"))]
    pub heart_rate: Option<f64>,

    #[validate(range(min = 70.0, max = 200.0, message = "Systolic pressure must be between 70 and 200"))]
    pub blood_pressure_sys: Option<f64>,

    #[validate(range(min = 40.0, max = 130.0, message = "Diastolic pressure must be between 40 and 130"))]
    pub blood_pressure_dia: Option<f64>,

    #[validate(range(min = 20.0, max = 300.0, message = "Weight must be between 20 and 300 kg"))]
    pub weight: Option<f64>,

    #[validate(range(min = 0.0, max = 24.0, message = "Sleep must be between 0 and 24 hours"))]
    pub sleep: Option<f64>,

    #[validate(range(min = 0.0, message = "Steps cannot be negative"))]
    pub steps: Option<f64>,

    #[validate(range(min = 0.0, max = 10.0, message = "Water must be between 0 and 10 glasses"))]
    pub water: Option<f64>,

    #[validate(range(min = 1.0, max = 10.0, message = "Mood must be between 1 and 10"))]
    pub mood: Option<f64>,

    #[validate(length(max = 2000, message = "Notes must not exceed 2000 characters"))]
    pub notes: Option<String>,
}

// --- レスポンスDTO ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEntryDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    pub heart_rate: Option<f64>,
    pub blood_pressure_sys: Option<f64>,
    pub blood_pressure_dia: Option<f64>,
    pub weight: Option<f64>,
    pub sleep: Option<f64>,
    pub steps: Option<f64>,
    pub water: Option<f64>,
    pub mood: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<health_entry_model::Model> for HealthEntryDto {
    fn from(model: health_entry_model::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            date: model.date,
            heart_rate: model.heart_rate,
            blood_pressure_sys: model.blood_pressure_sys,
            blood_pressure_dia: model.blood_pressure_dia,
            weight: model.weight,
            sleep: model.sleep,
            steps: model.steps,
            water: model.water,
            mood: model.mood,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
