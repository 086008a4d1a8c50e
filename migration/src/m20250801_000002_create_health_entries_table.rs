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
                    .table(HealthEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HealthEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HealthEntries::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(HealthEntries::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    // 各バイタルは任意入力
                    .col(ColumnDef::new(HealthEntries::HeartRate).double().null())
                    .col(
                        ColumnDef::new(HealthEntries::BloodPressureSys)
                            .double()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(HealthEntries::BloodPressureDia)
                            .double()
                            .null(),
                    )
                    .col(ColumnDef::new(HealthEntries::Weight).double().null())
                    .col(ColumnDef::new(HealthEntries::Sleep).double().null())
                    .col(ColumnDef::new(HealthEntries::Steps).double().null())
                    .col(ColumnDef::new(HealthEntries::Water).double().null())
                    .col(ColumnDef::new(HealthEntries::Mood).double().null())
                    .col(ColumnDef::new(HealthEntries::Notes).text().null())
                    .col(
                        ColumnDef::new(HealthEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(HealthEntries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_health_entries_user_id")
                            .from(HealthEntries::Table, HealthEntries::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 期間指定の集計クエリ用
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(HealthEntries::Table)
                    .name("idx_health_entries_user_id_date")
                    .col(HealthEntries::UserId)
                    .col(HealthEntries::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HealthEntries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HealthEntries {
    Table,
    Id,
    UserId,
    Date,
    HeartRate,
    BloodPressureSys,
    BloodPressureDia,
    Weight,
    Sleep,
    Steps,
    Water,
    Mood,
    Notes,
    CreatedAt,
    UpdatedAt,
}
