// src/repository/symptom_repository.rs

use crate::api::dto::symptom_dto::{CreateSymptomRequest, UpdateSymptomRequest};
use crate::domain::symptom_model::{
    self, ActiveModel as SymptomActiveModel, Entity as SymptomEntity,
};
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Set};
use uuid::Uuid;

pub struct SymptomRepository {
    db: DbConn,
}

impl SymptomRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id_for_user(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<symptom_model::Model>, DbErr> {
        SymptomEntity::find_by_id(id)
            .filter(symptom_model::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    pub async fn find_all_for_user(&self, user_id: Uuid) -> Result<Vec<symptom_model::Model>, DbErr> {
        SymptomEntity::find()
            .filter(symptom_model::Column::UserId.eq(user_id))
            .order_by_desc(symptom_model::Column::Date)
            .all(&self.db)
            .await
    }

    pub async fn create_for_user(
        &self,
        user_id: Uuid,
        payload: CreateSymptomRequest,
    ) -> Result<symptom_model::Model, DbErr> {
        let mut new_symptom = SymptomActiveModel {
            user_id: Set(user_id),
            symptoms: Set(serde_json::json!(payload.symptoms)),
            severity: Set(payload.severity),
            stress_level: Set(payload.stress_level),
            description: Set(payload.description),
            duration: Set(payload.duration),
            action_taken: Set(payload.action_taken),
            ..Default::default()
        };
        if let Some(date) = payload.date {
            new_symptom.date = Set(date);
        }
        new_symptom.insert(&self.db).await
    }

    pub async fn update_for_user(
        &self,
        user_id: Uuid,
        id: Uuid,
        payload: UpdateSymptomRequest,
    ) -> Result<Option<symptom_model::Model>, DbErr> {
        let symptom = match self.find_by_id_for_user(user_id, id).await? {
            Some(s) => s,
            None => return Ok(None),
        };

        let mut active_model: SymptomActiveModel = symptom.clone().into();
        let mut changed = false;

        if let Some(date) = payload.date {
            active_model.date = Set(date);
            changed = true;
        }
        if let Some(symptoms) = payload.symptoms {
            active_model.symptoms = Set(serde_json::json!(symptoms));
            changed = true;
        }
        if let Some(severity) = payload.severity {
            active_model.severity = Set(severity);
            changed = true;
        }
        if payload.stress_level.is_some() {
            active_model.stress_level = Set(payload.stress_level);
            changed = true;
        }
        if payload.description.is_some() {
            active_model.description = Set(payload.description);
            changed = true;
        }
        if payload.duration.is_some() {
            active_model.duration = Set(payload.duration);
            changed = true;
        }
        if payload.action_taken.is_some() {
            active_model.action_taken = Set(payload.action_taken);
            changed = true;
        }

        if changed {
            Ok(Some(active_model.update(&self.db).await?))
        } else {
            Ok(Some(symptom))
        }
    }

    pub async fn delete_for_user(&self, user_id: Uuid, id: Uuid) -> Result<DeleteResult, DbErr> {
        SymptomEntity::delete_many()
            .filter(symptom_model::Column::Id.eq(id))
            .filter(symptom_model::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
    }
}
