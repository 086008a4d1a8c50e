// src/repository/doctor_note_repository.rs

use crate::api::dto::doctor_note_dto::{CreateDoctorNoteRequest, UpdateDoctorNoteRequest};
use crate::domain::doctor_note_model::{
    self, ActiveModel as DoctorNoteActiveModel, Entity as DoctorNoteEntity,
};
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Set};
use uuid::Uuid;

pub struct DoctorNoteRepository {
    db: DbConn,
}

impl DoctorNoteRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id_for_user(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<doctor_note_model::Model>, DbErr> {
        DoctorNoteEntity::find_by_id(id)
            .filter(doctor_note_model::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    /// 受診日の新しい順
    pub async fn find_all_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<doctor_note_model::Model>, DbErr> {
        DoctorNoteEntity::find()
            .filter(doctor_note_model::Column::UserId.eq(user_id))
            .order_by_desc(doctor_note_model::Column::VisitDate)
            .all(&self.db)
            .await
    }

    pub async fn create_for_user(
        &self,
        user_id: Uuid,
        payload: CreateDoctorNoteRequest,
    ) -> Result<doctor_note_model::Model, DbErr> {
        let new_note = DoctorNoteActiveModel {
            user_id: Set(user_id),
            doctor_name: Set(payload.doctor_name),
            visit_date: Set(payload.visit_date.unwrap_or_else(chrono::Utc::now)),
            diagnosis: Set(payload.diagnosis),
            notes: Set(payload.notes),
            prescription: Set(payload.prescription),
            follow_up: Set(payload.follow_up),
            attachments: Set(serde_json::json!(payload.attachments)),
            ..Default::default()
        };
        new_note.insert(&self.db).await
    }

    pub async fn update_for_user(
        &self,
        user_id: Uuid,
        id: Uuid,
        payload: UpdateDoctorNoteRequest,
    ) -> Result<Option<doctor_note_model::Model>, DbErr> {
        let note = match self.find_by_id_for_user(user_id, id).await? {
            Some(n) => n,
            None => return Ok(None),
        };

        let mut active_model: DoctorNoteActiveModel = note.clone().into();
        let mut changed = false;

        if payload.doctor_name.is_some() {
            active_model.doctor_name = Set(payload.doctor_name);
            changed = true;
        }
        if let Some(visit_date) = payload.visit_date {
            active_model.visit_date = Set(visit_date);
            changed = true;
        }
        if payload.diagnosis.is_some() {
            active_model.diagnosis = Set(payload.diagnosis);
            changed = true;
        }
        if let Some(notes) = payload.notes {
            active_model.notes = Set(notes);
            changed = true;
        }
        if payload.prescription.is_some() {
            active_model.prescription = Set(payload.prescription);
            changed = true;
        }
        if payload.follow_up.is_some() {
            active_model.follow_up = Set(payload.follow_up);
            changed = true;
        }
        if let Some(attachments) = payload.attachments {
            active_model.attachments = Set(serde_json::json!(attachments));
            changed = true;
        }

        if changed {
            Ok(Some(active_model.update(&self.db).await?))
        } else {
            Ok(Some(note))
        }
    }

    pub async fn delete_for_user(&self, user_id: Uuid, id: Uuid) -> Result<DeleteResult, DbErr> {
        DoctorNoteEntity::delete_many()
            .filter(doctor_note_model::Column::Id.eq(id))
            .filter(doctor_note_model::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
    }
}
