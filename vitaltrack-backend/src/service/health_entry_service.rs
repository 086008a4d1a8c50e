// src/service/health_entry_service.rs

use crate::api::dto::health_dto::{HealthEntryDto, HealthEntryRequest};
use crate::api::dto::MessageResponse;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::repository::health_entry_repository::HealthEntryRepository;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub struct HealthEntryService {
    repo: Arc<HealthEntryRepository>,
}

impl HealthEntryService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(HealthEntryRepository::new(db_pool)),
        }
    }

    pub async fn list_entries(&self, user_id: Uuid) -> AppResult<Vec<HealthEntryDto>> {
        let entries = self.repo.find_all_for_user(user_id).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }

    pub async fn create_entry(
        &self,
        user_id: Uuid,
        payload: HealthEntryRequest,
    ) -> AppResult<HealthEntryDto> {
        payload.validate()?;
        let entry = self.repo.create_for_user(user_id, payload).await?;
        Ok(entry.into())
    }

    pub async fn update_entry(
        &self,
        user_id: Uuid,
        id: Uuid,
        payload: HealthEntryRequest,
    ) -> AppResult<HealthEntryDto> {
        payload.validate()?;
        self.repo
            .update_for_user(user_id, id, payload)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Entry not found".to_string()))
    }

    pub async fn delete_entry(&self, user_id: Uuid, id: Uuid) -> AppResult<MessageResponse> {
        let result = self.repo.delete_for_user(user_id, id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Entry not found".to_string()));
        }
        Ok(MessageResponse::new("Entry deleted successfully"))
    }
}
