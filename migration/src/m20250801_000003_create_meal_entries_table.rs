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
                    .table(MealEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MealEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MealEntries::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(MealEntries::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MealEntries::MealType).string_len(16).not_null())
                    .col(ColumnDef::new(MealEntries::FoodItems).json().not_null())
                    .col(
                        ColumnDef::new(MealEntries::TotalCalories)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(MealEntries::TotalProtein)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(MealEntries::TotalCarbs)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(MealEntries::TotalFat)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(MealEntries::Notes).text().null())
                    .col(
                        ColumnDef::new(MealEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(MealEntries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meal_entries_user_id")
                            .from(MealEntries::Table, MealEntries::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(MealEntries::Table)
                    .name("idx_meal_entries_user_id_date")
                    .col(MealEntries::UserId)
                    .col(MealEntries::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MealEntries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MealEntries {
    Table,
    Id,
    UserId,
    Date,
    MealType,
    FoodItems,
    TotalCalories,
    TotalProtein,
    TotalCarbs,
    TotalFat,
    Notes,
    CreatedAt,
    UpdatedAt,
}
