// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// ユーザー
mod m20250801_000001_create_users_table;

// ヘルスデータ関連マイグレーション（usersテーブルに依存）
mod m20250801_000002_create_health_entries_table;
mod m20250801_000003_create_meal_entries_table;
mod m20250801_000004_create_medications_table;
mod m20250801_000005_create_symptoms_table;
mod m20250801_000006_create_health_goals_table;
mod m20250801_000007_create_doctor_notes_table;
mod m20250801_000008_create_achievements_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 基本テーブル作成（依存関係なし）
            Box::new(m20250801_000001_create_users_table::Migration),
            // 2. 依存テーブル作成
            Box::new(m20250801_000002_create_health_entries_table::Migration),
            Box::new(m20250801_000003_create_meal_entries_table::Migration),
            Box::new(m20250801_000004_create_medications_table::Migration),
            Box::new(m20250801_000005_create_symptoms_table::Migration),
            Box::new(m20250801_000006_create_health_goals_table::Migration),
            Box::new(m20250801_000007_create_doctor_notes_table::Migration),
            Box::new(m20250801_000008_create_achievements_table::Migration),
        ]
    }
}
