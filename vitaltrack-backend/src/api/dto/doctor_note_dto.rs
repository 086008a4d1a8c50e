// src/api/dto/doctor_note_dto.rs

use crate::domain::doctor_note_model;
use crate::utils::validation::{self, required};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- リクエストDTO ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDoctorNoteRequest {
    pub doctor_name: Option<String>,
    pub visit_date: Option<DateTime<Utc>>,
    pub diagnosis: Option<String>,

    #[validate(
        length(min = required::MIN_LENGTH, message = "Notes are required"),
        custom(function = validation::validate_not_blank)
    )]
    pub notes: String,

    pub prescription: Option<String>,
    pub follow_up: Option<DateTime<Utc>>,

    #[serde(default)]
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDoctorNoteRequest {
    pub doctor_name: Option<String>,
    pub visit_date: Option<DateTime<Utc>>,
    pub diagnosis: Option<String>,

    #[validate(
        length(min = required::MIN_LENGTH, message = "Notes are required"),
        custom(function = validation::validate_not_blank)
    )]
    pub notes: Option<String>,

    pub prescription: Option<String>,
    pub follow_up: Option<DateTime<Utc>>,
    pub attachments: Option<Vec<String>>,
}

// --- レスポンスDTO ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorNoteDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub doctor_name: Option<String>,
    pub visit_date: DateTime<Utc>,
    pub diagnosis: Option<String>,
    pub notes: String,
    pub prescription: Option<String>,
    pub follow_up: Option<DateTime<Utc>>,
    pub attachments: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<doctor_note_model::Model> for DoctorNoteDto {
    fn from(model: doctor_note_model::Model) -> Self {
        Self {
            attachments: model.attachment_list(),
            id: model.id,
            user_id: model.user_id,
            doctor_name: model.doctor_name,
            visit_date: model.visit_date,
            diagnosis: model.diagnosis,
            notes: model.notes,
            prescription: model.prescription,
            follow_up: model.follow_up,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
