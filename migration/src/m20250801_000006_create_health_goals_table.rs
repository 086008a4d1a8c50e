use sea_orm_migration::prelude::*;

use super::m20250801_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HealthGoals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HealthGoals::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HealthGoals::UserId).uuid().not_null())
                    .col(ColumnDef::new(HealthGoals::GoalType).string_len(16).not_null())
                    .col(ColumnDef::new(HealthGoals::TargetValue).double().not_null())
                    .col(
                        ColumnDef::new(HealthGoals::CurrentValue)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(HealthGoals::Unit).string_len(32).null())
                    .col(
                        ColumnDef::new(HealthGoals::Deadline)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(HealthGoals::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(HealthGoals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(HealthGoals::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_health_goals_user_id")
                            .from(HealthGoals::Table, HealthGoals::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HealthGoals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HealthGoals {
    Table,
    Id,
    UserId,
    GoalType,
    TargetValue,
    CurrentValue,
    Unit,
    Deadline,
    Completed,
    CreatedAt,
    UpdatedAt,
}
