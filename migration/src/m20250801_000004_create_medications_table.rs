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
                    .table(Medications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Medications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Medications::UserId).uuid().not_null())
                    .col(ColumnDef::new(Medications::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Medications::Dosage).string_len(255).null())
                    .col(
                        ColumnDef::new(Medications::Frequency)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Medications::PrescribedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Medications::EndDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Medications::Reason).text().null())
                    .col(ColumnDef::new(Medications::Notes).text().null())
                    .col(
                        ColumnDef::new(Medications::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    // 服薬記録 [{date, time, taken}]
                    .col(ColumnDef::new(Medications::Logs).json().not_null())
                    .col(
                        ColumnDef::new(Medications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Medications::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_medications_user_id")
                            .from(Medications::Table, Medications::UserId)
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
            .drop_table(Table::drop().table(Medications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Medications {
    Table,
    Id,
    UserId,
    Name,
    Dosage,
    Frequency,
    PrescribedDate,
    EndDate,
    Reason,
    Notes,
    Active,
    Logs,
    CreatedAt,
    UpdatedAt,
}
