// src/api/dto/meal_dto.rs

use crate::domain::meal_entry_model::{self, FoodItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

fn validate_meal_type(value: &str) -> Result<(), ValidationError> {
    if crate::domain::meal_type::MealType::from_str(value).is_some() {
        return Ok(());
    }
    let mut error = ValidationError::new("invalid_meal_type");
    error.message = Some("Meal type must be breakfast, lunch, dinner or snack".into());
    Err(error)
}

fn validate_food_items(items: &[FoodItem]) -> Result<(), ValidationError> {
    if items.iter().any(|item| item.name.trim().is_empty()) {
        let mut error = ValidationError::new("invalid_food_item");
        error.message = Some("Every food item needs a name".into());
        return Err(error);
    }
    Ok(())
}

// --- リクエストDTO ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealRequest {
    pub date: Option<DateTime<Utc>>,

    #[validate(custom(function = validate_meal_type))]
    pub meal_type: String,

    #[serde(default)]
    #[validate(custom(function = validate_food_items))]
    pub food_items: Vec<FoodItem>,

    pub notes: Option<String>,
}

/// foodItems を渡した場合のみ合計を再計算する
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMealRequest {
    pub date: Option<DateTime<Utc>>,

    #[validate(custom(function = validate_meal_type))]
    pub meal_type: Option<String>,

    #[validate(custom(function = validate_food_items))]
    pub food_items: Option<Vec<FoodItem>>,

    pub notes: Option<String>,
}

// --- レスポンスDTO ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntryDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    pub meal_type: String,
    pub food_items: Vec<FoodItem>,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<meal_entry_model::Model> for MealEntryDto {
    fn from(model: meal_entry_model::Model) -> Self {
        Self {
            food_items: model.food_item_list(),
            id: model.id,
            user_id: model.user_id,
            date: model.date,
            meal_type: model.meal_type,
            total_calories: model.total_calories,
            total_protein: model.total_protein,
            total_carbs: model.total_carbs,
            total_fat: model.total_fat,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
