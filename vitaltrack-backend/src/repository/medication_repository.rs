// src/repository/medication_repository.rs

use crate::api::dto::medication_dto::{CreateMedicationRequest, UpdateMedicationRequest};
use crate::domain::medication_model::{
    self, ActiveModel as MedicationActiveModel, Entity as MedicationEntity, MedicationLog,
};
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Set};
use uuid::Uuid;

pub struct MedicationRepository {
    db: DbConn,
}

impl MedicationRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id_for_user(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<medication_model::Model>, DbErr> {
        MedicationEntity::find_by_id(id)
            .filter(medication_model::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    pub async fn find_all_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<medication_model::Model>, DbErr> {
        MedicationEntity::find()
            .filter(medication_model::Column::UserId.eq(user_id))
            .order_by_desc(medication_model::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    pub async fn create_for_user(
        &self,
        user_id: Uuid,
        payload: CreateMedicationRequest,
    ) -> Result<medication_model::Model, DbErr> {
        let new_medication = MedicationActiveModel {
            user_id: Set(user_id),
            name: Set(payload.name.trim().to_string()),
            dosage: Set(payload.dosage),
            frequency: Set(payload.frequency),
            prescribed_date: Set(payload.prescribed_date),
            end_date: Set(payload.end_date),
            reason: Set(payload.reason),
            notes: Set(payload.notes),
            ..Default::default()
        };
        new_medication.insert(&self.db).await
    }

    pub async fn update_for_user(
        &self,
        user_id: Uuid,
        id: Uuid,
        payload: UpdateMedicationRequest,
    ) -> Result<Option<medication_model::Model>, DbErr> {
        let medication = match self.find_by_id_for_user(user_id, id).await? {
            Some(m) => m,
            None => return Ok(None),
        };

        let mut active_model: MedicationActiveModel = medication.clone().into();
        let mut changed = false;

        if let Some(name) = payload.name {
            active_model.name = Set(name.trim().to_string());
            changed = true;
        }
        if payload.dosage.is_some() {
            active_model.dosage = Set(payload.dosage);
            changed = true;
        }
        if let Some(frequency) = payload.frequency {
            active_model.frequency = Set(frequency);
            changed = true;
        }
        if payload.prescribed_date.is_some() {
            active_model.prescribed_date = Set(payload.prescribed_date);
            changed = true;
        }
        if payload.end_date.is_some() {
            active_model.end_date = Set(payload.end_date);
            changed = true;
        }
        if payload.reason.is_some() {
            active_model.reason = Set(payload.reason);
            changed = true;
        }
        if payload.notes.is_some() {
            active_model.notes = Set(payload.notes);
            changed = true;
        }
        if let Some(active) = payload.active {
            active_model.active = Set(active);
            changed = true;
        }

        if changed {
            Ok(Some(active_model.update(&self.db).await?))
        } else {
            Ok(Some(medication))
        }
    }

    /// 服薬記録を末尾に追加
    pub async fn append_log_for_user(
        &self,
        user_id: Uuid,
        id: Uuid,
        log: MedicationLog,
    ) -> Result<Option<medication_model::Model>, DbErr> {
        let medication = match self.find_by_id_for_user(user_id, id).await? {
            Some(m) => m,
            None => return Ok(None),
        };

        let mut logs = medication.log_list();
        logs.push(log);

        let mut active_model: MedicationActiveModel = medication.into();
        active_model.logs = Set(serde_json::to_value(&logs)
            .map_err(|e| DbErr::Custom(format!("medication logs: {}", e)))?);
        Ok(Some(active_model.update(&self.db).await?))
    }

    pub async fn delete_for_user(&self, user_id: Uuid, id: Uuid) -> Result<DeleteResult, DbErr> {
        MedicationEntity::delete_many()
            .filter(medication_model::Column::Id.eq(id))
            .filter(medication_model::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
    }
}
