// src/service/mod.rs

pub mod achievement_service;
pub mod analytics_service;
pub mod auth_service;
pub mod doctor_note_service;
pub mod export_service;
pub mod goal_service;
pub mod health_entry_service;
pub mod meal_service;
pub mod medication_service;
pub mod notification_service;
pub mod symptom_service;
pub mod user_service;
