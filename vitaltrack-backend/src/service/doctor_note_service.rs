// src/service/doctor_note_service.rs

use crate::api::dto::doctor_note_dto::{
    CreateDoctorNoteRequest, DoctorNoteDto, UpdateDoctorNoteRequest,
};
use crate::api::dto::MessageResponse;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::repository::doctor_note_repository::DoctorNoteRepository;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub struct DoctorNoteService {
    repo: Arc<DoctorNoteRepository>,
}

impl DoctorNoteService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(DoctorNoteRepository::new(db_pool)),
        }
    }

    pub async fn list_notes(&self, user_id: Uuid) -> AppResult<Vec<DoctorNoteDto>> {
        let notes = self.repo.find_all_for_user(user_id).await?;
        Ok(notes.into_iter().map(Into::into).collect())
    }

    pub async fn create_note(
        &self,
        user_id: Uuid,
        payload: CreateDoctorNoteRequest,
    ) -> AppResult<DoctorNoteDto> {
        payload.validate()?;
        let note = self.repo.create_for_user(user_id, payload).await?;
        Ok(note.into())
    }

    pub async fn update_note(
        &self,
        user_id: Uuid,
        id: Uuid,
        payload: UpdateDoctorNoteRequest,
    ) -> AppResult<DoctorNoteDto> {
        payload.validate()?;
        self.repo
            .update_for_user(user_id, id, payload)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Doctor note not found".to_string()))
    }

    pub async fn delete_note(&self, user_id: Uuid, id: Uuid) -> AppResult<MessageResponse> {
        let result = self.repo.delete_for_user(user_id, id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Doctor note not found".to_string()));
        }
        Ok(MessageResponse::new("Doctor note deleted"))
    }
}
