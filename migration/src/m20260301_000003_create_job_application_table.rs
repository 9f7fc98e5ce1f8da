use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260301_000001_create_user_table::User, m20260301_000002_create_job_table::Job};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(JobApplication::Id))
                    .col(integer(JobApplication::JobId))
                    .col(integer(JobApplication::ApplicantId))
                    .col(string(JobApplication::Status).default("submitted"))
                    .col(text_null(JobApplication::CoverLetter))
                    .col(string_null(JobApplication::Resume))
                    .col(text_null(JobApplication::Notes))
                    .col(double_null(JobApplication::Score))
                    .col(timestamp(JobApplication::SubmittedAt))
                    .col(timestamp_null(JobApplication::ReviewedAt))
                    .col(integer_null(JobApplication::ReviewedById))
                    .col(timestamp_null(JobApplication::WithdrawnAt))
                    .col(
                        timestamp(JobApplication::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(JobApplication::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_application_job_id")
                            .from(JobApplication::Table, JobApplication::JobId)
                            .to(Job::Table, Job::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_application_applicant_id")
                            .from(JobApplication::Table, JobApplication::ApplicantId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_application_reviewed_by_id")
                            .from(JobApplication::Table, JobApplication::ReviewedById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One application per applicant per job
        manager
            .create_index(
                Index::create()
                    .name("idx_job_application_job_applicant")
                    .table(JobApplication::Table)
                    .col(JobApplication::JobId)
                    .col(JobApplication::ApplicantId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobApplication::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum JobApplication {
    Table,
    Id,
    JobId,
    ApplicantId,
    Status,
    CoverLetter,
    Resume,
    Notes,
    Score,
    SubmittedAt,
    ReviewedAt,
    ReviewedById,
    WithdrawnAt,
    CreatedAt,
    UpdatedAt,
}
