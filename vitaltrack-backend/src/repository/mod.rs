// src/repository/mod.rs

pub mod achievement_repository;
pub mod doctor_note_repository;
pub mod health_entry_repository;
pub mod health_goal_repository;
pub mod health_query_gateway;
pub mod meal_entry_repository;
pub mod medication_repository;
pub mod symptom_repository;
pub mod user_repository;
