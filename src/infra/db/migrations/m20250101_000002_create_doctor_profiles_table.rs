//! Migration: Create the doctor_profiles table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DoctorProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DoctorProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // 1:1 with a doctor user
                    .col(
                        ColumnDef::new(DoctorProfiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(DoctorProfiles::Specialization)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DoctorProfiles::LicenseNumber)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DoctorProfiles::YearsOfExperience)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DoctorProfiles::Qualification)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DoctorProfiles::Bio).text().null())
                    .col(
                        ColumnDef::new(DoctorProfiles::ConsultationFee)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DoctorProfiles::VerificationStatus)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DoctorProfiles::VerifiedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(DoctorProfiles::VerifiedBy).uuid().null())
                    .col(
                        ColumnDef::new(DoctorProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DoctorProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_doctor_profiles_user_id")
                            .from(DoctorProfiles::Table, DoctorProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Marketplace and admin views filter on verification status
        manager
            .create_index(
                Index::create()
                    .name("idx_doctor_profiles_verification_status")
                    .table(DoctorProfiles::Table)
                    .col(DoctorProfiles::VerificationStatus)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DoctorProfiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DoctorProfiles {
    Table,
    Id,
    UserId,
    Specialization,
    LicenseNumber,
    YearsOfExperience,
    Qualification,
    Bio,
    ConsultationFee,
    VerificationStatus,
    VerifiedAt,
    VerifiedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
