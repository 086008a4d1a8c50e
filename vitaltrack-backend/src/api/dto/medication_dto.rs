// src/api/dto/medication_dto.rs

use crate::domain::medication_frequency::MedicationFrequency;
use crate::domain::medication_model::{self, MedicationLog};
use crate::utils::validation::{self, required};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

fn validate_frequency(value: &str) -> Result<(), ValidationError> {
    if MedicationFrequency::from_str(value).is_some() {
        return Ok(());
    }
    let mut error = ValidationError::new("invalid_frequency");
    error.message =
        Some("Frequency must be once daily, twice daily, three times daily or as needed".into());
    Err(error)
}

// --- リクエストDTO ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMedicationRequest {
    #[validate(
        length(min = required::MIN_LENGTH, max = 255, message = "Medication name is required"),
        custom(function = validation::validate_not_blank)
    )]
    pub name: String,

    pub dosage: Option<String>,

    #[validate(custom(function = validate_frequency))]
    pub frequency: String,

    pub prescribed_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMedicationRequest {
    #[validate(
        length(min = required::MIN_LENGTH, max = 255, message = "Medication name is required"),
        custom(function = validation::validate_not_blank)
    )]
    pub name: Option<String>,

    pub dosage: Option<String>,

    #[validate(custom(function = validate_frequency))]
    pub frequency: Option<String>,

    pub prescribed_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub active: Option<bool>,
}

/// 服薬記録。日時はサーバー側で付与
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogMedicationRequest {
    #[validate(length(max = 32, message = "Time must not exceed 32 characters"))]
    pub time: Option<String>,

    #[serde(default = "default_taken")]
    pub taken: bool,
}

fn default_taken() -> bool {
    true
}

// --- レスポンスDTO ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: String,
    pub prescribed_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub active: bool,
    pub logs: Vec<MedicationLog>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<medication_model::Model> for MedicationDto {
    fn from(model: medication_model::Model) -> Self {
        Self {
            logs: model.log_list(),
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            dosage: model.dosage,
            frequency: model.frequency,
            prescribed_date: model.prescribed_date,
            end_date: model.end_date,
            reason: model.reason,
            notes: model.notes,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_validation() {
        let request: CreateMedicationRequest = serde_json::from_str(
            r#"{"name": "Metformin", "dosage": "500mg", "frequency": "twice daily"}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());

        let hourly = CreateMedicationRequest {
            frequency: "hourly".to_string(),
            ..request
        };
        assert!(hourly.validate().is_err());
    }

    #[test]
    fn test_log_defaults_to_taken() {
        let log: LogMedicationRequest = serde_json::from_str(r#"{"time": "08:00"}"#).unwrap();
        assert!(log.taken);
    }
}
