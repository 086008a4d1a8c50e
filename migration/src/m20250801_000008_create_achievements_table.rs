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
                    .table(Achievements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Achievements::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Achievements::UserId).uuid().not_null())
                    .col(ColumnDef::new(Achievements::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Achievements::Description).text().null())
                    .col(ColumnDef::new(Achievements::BadgeIcon).string_len(255).null())
                    .col(
                        ColumnDef::new(Achievements::AchievementType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Achievements::UnlockedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // {current, target}
                    .col(ColumnDef::new(Achievements::Progress).json().null())
                    .col(
                        ColumnDef::new(Achievements::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_achievements_user_id")
                            .from(Achievements::Table, Achievements::UserId)
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
            .drop_table(Table::drop().table(Achievements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Achievements {
    Table,
    Id,
    UserId,
    Title,
    Description,
    BadgeIcon,
    AchievementType,
    UnlockedDate,
    Progress,
    CreatedAt,
}
