// src/service/meal_service.rs

use crate::api::dto::meal_dto::{CreateMealRequest, MealEntryDto, UpdateMealRequest};
use crate::api::dto::MessageResponse;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::repository::meal_entry_repository::MealEntryRepository;
use chrono::{Duration, NaiveDate};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub struct MealService {
    repo: Arc<MealEntryRepository>,
}

impl MealService {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            repo: Arc::new(MealEntryRepository::new(db_pool)),
        }
    }

    pub async fn list_meals(&self, user_id: Uuid) -> AppResult<Vec<MealEntryDto>> {
        let meals = self.repo.find_all_for_user(user_id).await?;
        Ok(meals.into_iter().map(Into::into).collect())
    }

    /// 指定日（UTC）の 0 時から翌 0 時まで
    pub async fn list_meals_on(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<MealEntryDto>> {
        let start = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| AppError::BadRequest("Invalid date".to_string()))?
            .and_utc();
        let end = start + Duration::days(1);

        let meals = self.repo.find_between_for_user(user_id, start, end).await?;
        Ok(meals.into_iter().map(Into::into).collect())
    }

    pub async fn create_meal(
        &self,
        user_id: Uuid,
        payload: CreateMealRequest,
    ) -> AppResult<MealEntryDto> {
        payload.validate()?;
        let meal = self.repo.create_for_user(user_id, payload).await?;
        Ok(meal.into())
    }

    pub async fn update_meal(
        &self,
        user_id: Uuid,
        id: Uuid,
        payload: UpdateMealRequest,
    ) -> AppResult<MealEntryDto> {
        payload.validate()?;
        self.repo
            .update_for_user(user_id, id, payload)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Meal entry not found".to_string()))
    }

    pub async fn delete_meal(&self, user_id: Uuid, id: Uuid) -> AppResult<MessageResponse> {
        let result = self.repo.delete_for_user(user_id, id).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Meal entry not found".to_string()));
        }
        Ok(MessageResponse::new("Meal entry deleted"))
    }
}
