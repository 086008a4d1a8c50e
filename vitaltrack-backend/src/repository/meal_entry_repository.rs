// src/repository/meal_entry_repository.rs

use crate::api::dto::meal_dto::{CreateMealRequest, UpdateMealRequest};
use crate::domain::meal_entry_model::{
    self, ActiveModel as MealEntryActiveModel, Entity as MealEntryEntity, FoodItem, MealTotals,
};
use chrono::{DateTime, Utc};
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Set};
use uuid::Uuid;

pub struct MealEntryRepository {
    db: DbConn,
}

fn food_items_json(items: &[FoodItem]) -> Result<serde_json::Value, DbErr> {
    serde_json::to_value(items).map_err(|e| DbErr::Custom(format!("food items: {}", e)))
}

impl MealEntryRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id_for_user(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<meal_entry_model::Model>, DbErr> {
        MealEntryEntity::find_by_id(id)
            .filter(meal_entry_model::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    pub async fn find_all_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<meal_entry_model::Model>, DbErr> {
        MealEntryEntity::find()
            .filter(meal_entry_model::Column::UserId.eq(user_id))
            .order_by_desc(meal_entry_model::Column::Date)
            .all(&self.db)
            .await
    }

    /// [start, end)
    pub async fn find_between_for_user(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<meal_entry_model::Model>, DbErr> {
        MealEntryEntity::find()
            .filter(meal_entry_model::Column::UserId.eq(user_id))
            .filter(meal_entry_model::Column::Date.gte(start))
            .filter(meal_entry_model::Column::Date.lt(end))
            .order_by_asc(meal_entry_model::Column::Date)
            .all(&self.db)
            .await
    }

    pub async fn create_for_user(
        &self,
        user_id: Uuid,
        payload: CreateMealRequest,
    ) -> Result<meal_entry_model::Model, DbErr> {
        let totals = MealTotals::from_items(&payload.food_items);

        let mut new_meal = MealEntryActiveModel {
            user_id: Set(user_id),
            meal_type: Set(payload.meal_type),
            food_items: Set(food_items_json(&payload.food_items)?),
            total_calories: Set(totals.calories),
            total_protein: Set(totals.protein),
            total_carbs: Set(totals.carbs),
            total_fat: Set(totals.fat),
            notes: Set(payload.notes),
            ..Default::default()
        };
        if let Some(date) = payload.date {
            new_meal.date = Set(date);
        }
        new_meal.insert(&self.db).await
    }

    pub async fn update_for_user(
        &self,
        user_id: Uuid,
        id: Uuid,
        payload: UpdateMealRequest,
    ) -> Result<Option<meal_entry_model::Model>, DbErr> {
        let meal = match self.find_by_id_for_user(user_id, id).await? {
            Some(m) => m,
            None => return Ok(None),
        };

        let mut active_model: MealEntryActiveModel = meal.clone().into();
        let mut changed = false;

        if let Some(date) = payload.date {
            active_model.date = Set(date);
            changed = true;
        }
        if let Some(meal_type) = payload.meal_type {
            active_model.meal_type = Set(meal_type);
            changed = true;
        }
        // 品目を差し替えたら合計も再計算
        if let Some(items) = payload.food_items {
            let totals = MealTotals::from_items(&items);
            active_model.food_items = Set(food_items_json(&items)?);
            active_model.total_calories = Set(totals.calories);
            active_model.total_protein = Set(totals.protein);
            active_model.total_carbs = Set(totals.carbs);
            active_model.total_fat = Set(totals.fat);
            changed = true;
        }
        if payload.notes.is_some() {
            active_model.notes = Set(payload.notes);
            changed = true;
        }

        if changed {
            Ok(Some(active_model.update(&self.db).await?))
        } else {
            Ok(Some(meal))
        }
    }

    pub async fn delete_for_user(&self, user_id: Uuid, id: Uuid) -> Result<DeleteResult, DbErr> {
        MealEntryEntity::delete_many()
            .filter(meal_entry_model::Column::Id.eq(id))
            .filter(meal_entry_model::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
    }
}
