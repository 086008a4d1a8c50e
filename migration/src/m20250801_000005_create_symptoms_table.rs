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
                    .table(Symptoms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Symptoms::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Symptoms::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Symptoms::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Symptoms::Symptoms).json().not_null())
                    .col(ColumnDef::new(Symptoms::Severity).integer().not_null())
                    .col(ColumnDef::new(Symptoms::StressLevel).integer().null())
                    .col(ColumnDef::new(Symptoms::Description).text().null())
                    .col(ColumnDef::new(Symptoms::Duration).string_len(100).null())
                    .col(ColumnDef::new(Symptoms::ActionTaken).text().null())
                    .col(
                        ColumnDef::new(Symptoms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Symptoms::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_symptoms_user_id")
                            .from(Symptoms::Table, Symptoms::UserId)
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
            .drop_table(Table::drop().table(Symptoms::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Symptoms {
    Table,
    Id,
    UserId,
    Date,
    Symptoms,
    Severity,
    StressLevel,
    Description,
    Duration,
    ActionTaken,
    CreatedAt,
    UpdatedAt,
}
