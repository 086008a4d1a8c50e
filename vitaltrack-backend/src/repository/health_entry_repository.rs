// src/repository/health_entry_repository.rs

use crate::api::dto::health_dto::HealthEntryRequest;
use crate::domain::health_entry_model::{
    self, ActiveModel as HealthEntryActiveModel, Entity as HealthEntryEntity,
};
use crate::repository::health_query_gateway::{DateWindow, SortDirection};
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Set};
use uuid::Uuid;

pub struct HealthEntryRepository {
    db: DbConn,
}

impl HealthEntryRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id_for_user(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<health_entry_model::Model>, DbErr> {
        HealthEntryEntity::find_by_id(id)
            .filter(health_entry_model::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    /// 新しい順
    pub async fn find_all_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<health_entry_model::Model>, DbErr> {
        HealthEntryEntity::find()
            .filter(health_entry_model::Column::UserId.eq(user_id))
            .order_by_desc(health_entry_model::Column::Date)
            .all(&self.db)
            .await
    }

    /// since 以上 until 未満
    pub async fn find_in_window(
        &self,
        user_id: Uuid,
        window: DateWindow,
        direction: SortDirection,
    ) -> Result<Vec<health_entry_model::Model>, DbErr> {
        let mut conditions = Condition::all().add(health_entry_model::Column::UserId.eq(user_id));

        if let Some(since) = window.since {
            conditions = conditions.add(health_entry_model::Column::Date.gte(since));
        }
        if let Some(until) = window.until {
            conditions = conditions.add(health_entry_model::Column::Date.lt(until));
        }

        let order = match direction {
            SortDirection::Ascending => Order::Asc,
            SortDirection::Descending => Order::Desc,
        };

        HealthEntryEntity::find()
            .filter(conditions)
            .order_by(health_entry_model::Column::Date, order)
            .all(&self.db)
            .await
    }

    pub async fn find_recent(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<health_entry_model::Model>, DbErr> {
        HealthEntryEntity::find()
            .filter(health_entry_model::Column::UserId.eq(user_id))
            .order_by_desc(health_entry_model::Column::Date)
            .limit(limit)
            .all(&self.db)
            .await
    }

    pub async fn create_for_user(
        &self,
        user_id: Uuid,
        payload: HealthEntryRequest,
    ) -> Result<health_entry_model::Model, DbErr> {
        let mut new_entry = HealthEntryActiveModel {
            user_id: Set(user_id),
            heart_rate: Set(payload.heart_rate),
            blood_pressure_sys: Set(payload.blood_pressure_sys),
            blood_pressure_dia: Set(payload.blood_pressure_dia),
            weight: Set(payload.weight),
            sleep: Set(payload.sleep),
            steps: Set(payload.steps),
            water: Set(payload.water),
            mood: Set(payload.mood),
            notes: Set(payload.notes),
            ..Default::default()
        };
        // 日付省略時は現在時刻
        if let Some(date) = payload.date {
            new_entry.date = Set(date);
        }
        new_entry.insert(&self.db).await
    }

    pub async fn update_for_user(
        &self,
        user_id: Uuid,
        id: Uuid,
        payload: HealthEntryRequest,
    ) -> Result<Option<health_entry_model::Model>, DbErr> {
        let entry = match self.find_by_id_for_user(user_id, id).await? {
            Some(e) => e,
            None => return Ok(None),
        };

        let mut active_model: HealthEntryActiveModel = entry.clone().into();
        let mut changed = false;

        if let Some(date) = payload.date {
            active_model.date = Set(date);
            changed = true;
        }

        if payload.heart_rate.is_some() {
            active_model.heart_rate = Set(payload.heart_rate);
            changed = true;
        }
        if payload.blood_pressure_sys.is_some() {
            active_model.blood_pressure_sys = Set(payload.blood_pressure_sys);
            changed = true;
        }
        if payload.blood_pressure_dia.is_some() {
            active_model.blood_pressure_dia = Set(payload.blood_pressure_dia);
            changed = true;
        }
        if payload.weight.is_some() {
            active_model.weight = Set(payload.weight);
            changed = true;
        }
        if payload.sleep.is_some() {
            active_model.sleep = Set(payload.sleep);
            changed = true;
        }
        if payload.steps.is_some() {
            active_model.steps = Set(payload.steps);
            changed = true;
        }
        if payload.water.is_some() {
            active_model.water = Set(payload.water);
            changed = true;
        }
        if payload.mood.is_some() {
            active_model.mood = Set(payload.mood);
            changed = true;
        }
        if payload.notes.is_some() {
            active_model.notes = Set(payload.notes);
            changed = true;
        }

        if changed {
            Ok(Some(active_model.update(&self.db).await?))
        } else {
            Ok(Some(entry))
        }
    }

    pub async fn delete_for_user(&self, user_id: Uuid, id: Uuid) -> Result<DeleteResult, DbErr> {
        HealthEntryEntity::delete_many()
            .filter(health_entry_model::Column::Id.eq(id))
            .filter(health_entry_model::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
    }
}
