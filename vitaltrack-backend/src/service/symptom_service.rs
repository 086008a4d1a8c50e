// src/service/symptom_service.rs

use crate::api::dto::symptom_dto::{CreateSymptomRequest, SymptomDto, UpdateSymptomRequest};
use crate::api::dto::MessageResponse;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::repository::symptom_repository::SymptomRepository;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub struct SymptomService {
    repo: Arc<SymptomRepository>,
}

impl SymptomService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(SymptomRepository::new(db_pool)),
        }
    }

    pub async fn list_symptoms(&self, user_id: Uuid) -> AppResult<Vec<SymptomDto>> {
        let symptoms = self.repo.find_all_for_user(user_id).await?;
        Ok(symptoms.into_iter().map(Into::into).collect())
    }

    pub async fn create_symptom(
        &self,
        user_id: Uuid,
        payload: CreateSymptomRequest,
    ) -> AppResult<SymptomDto> {
        payload.validate()?;
        let symptom = self.repo.create_for_user(user_id, payload).await?;
        Ok(symptom.into())
    }

    pub async fn update_symptom(
        &self,
        user_id: Uuid,
        id: Uuid,
        payload: UpdateSymptomRequest,
    ) -> AppResult<SymptomDto> {
        payload.validate()?;
        self.repo
            .update_for_user(user_id, id, payload)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Symptom not found".to_string()))
    }

    pub async fn delete_symptom(&self, user_id: Uuid, id: Uuid) -> AppResult<MessageResponse> {
        let result = self.repo.delete_for_user(user_id, id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Symptom not found".to_string()));
        }
        Ok(MessageResponse::new("Symptom deleted"))
    }
}
