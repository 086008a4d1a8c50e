// src/service/medication_service.rs

use crate::api::dto::medication_dto::{
    CreateMedicationRequest, LogMedicationRequest, MedicationDto, UpdateMedicationRequest,
};
use crate::api::dto::MessageResponse;
use crate::db::DbPool;
use crate::domain::medication_model::MedicationLog;
use crate::error::{AppError, AppResult};
use crate::repository::medication_repository::MedicationRepository;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub struct MedicationService {
    repo: Arc<MedicationRepository>,
}

impl MedicationService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(MedicationRepository::new(db_pool)),
        }
    }

    pub async fn list_medications(&self, user_id: Uuid) -> AppResult<Vec<MedicationDto>> {
        let medications = self.repo.find_all_for_user(user_id).await?;
        Ok(medications.into_iter().map(Into::into).collect())
    }

    pub async fn create_medication(
        &self,
        user_id: Uuid,
        payload: CreateMedicationRequest,
    ) -> AppResult<MedicationDto> {
        payload.validate()?;
        let medication = self.repo.create_for_user(user_id, payload).await?;
        Ok(medication.into())
    }

    /// 服薬を記録（日時は現在時刻）
    pub async fn log_intake(
        &self,
        user_id: Uuid,
        id: Uuid,
        payload: LogMedicationRequest,
    ) -> AppResult<MedicationDto> {
        payload.validate()?;
        let log = MedicationLog {
            date: Utc::now(),
            time: payload.time,
            taken: payload.taken,
        };
        self.repo
            .append_log_for_user(user_id, id, log)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Medication not found".to_string()))
    }

    pub async fn update_medication(
        &self,
        user_id: Uuid,
        id: Uuid,
        payload: UpdateMedicationRequest,
    ) -> AppResult<MedicationDto> {
        payload.validate()?;
        self.repo
            .update_for_user(user_id, id, payload)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Medication not found".to_string()))
    }

    pub async fn delete_medication(&self, user_id: Uuid, id: Uuid) -> AppResult<MessageResponse> {
        let result = self.repo.delete_for_user(user_id, id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Medication not found".to_string()));
        }
        Ok(MessageResponse::new("Medication deleted"))
    }
}
