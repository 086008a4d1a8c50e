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
                    .table(DoctorNotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DoctorNotes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DoctorNotes::UserId).uuid().not_null())
                    .col(ColumnDef::new(DoctorNotes::DoctorName).string_len(255).null())
                    .col(
                        ColumnDef::new(DoctorNotes::VisitDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DoctorNotes::Diagnosis).text().null())
                    .col(ColumnDef::new(DoctorNotes::Notes).text().not_null())
                    .col(ColumnDef::new(DoctorNotes::Prescription).text().null())
                    .col(
                        ColumnDef::new(DoctorNotes::FollowUp)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(DoctorNotes::Attachments).json().not_null())
                    .col(
                        ColumnDef::new(DoctorNotes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(DoctorNotes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_doctor_notes_user_id")
                            .from(DoctorNotes::Table, DoctorNotes::UserId)
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
            .drop_table(Table::drop().table(DoctorNotes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DoctorNotes {
    Table,
    Id,
    UserId,
    DoctorName,
    VisitDate,
    Diagnosis,
    Notes,
    Prescription,
    FollowUp,
    Attachments,
    CreatedAt,
    UpdatedAt,
}
