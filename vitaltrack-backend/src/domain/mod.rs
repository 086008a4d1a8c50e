// src/domain/mod.rs
pub mod achievement_model;
pub mod achievement_type;
pub mod doctor_note_model;
pub mod gender;
pub mod goal_type;
pub mod health_entry_model;
pub mod health_goal_model;
pub mod health_metric;
pub mod meal_entry_model;
pub mod meal_type;
pub mod medication_frequency;
pub mod medication_model;
pub mod symptom_model;
pub mod user_model;
