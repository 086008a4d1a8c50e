// src/api/dto/mod.rs

pub mod achievement_dto;
pub mod analytics_dto;
pub mod common;
pub mod doctor_note_dto;
pub mod export_dto;
pub mod goal_dto;
pub mod health_dto;
pub mod meal_dto;
pub mod medication_dto;
pub mod symptom_dto;
pub mod user_dto;

pub use common::MessageResponse;
