use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(pk_auto(Job::Id))
                    .col(string(Job::Title))
                    .col(text(Job::Description))
                    .col(text_null(Job::Requirements))
                    .col(text_null(Job::Benefits))
                    .col(string(Job::Department))
                    .col(string(Job::Location))
                    .col(string(Job::Status).default("draft"))
                    .col(string(Job::JobType).default("full_time"))
                    .col(string_null(Job::ExperienceLevel))
                    .col(integer_null(Job::SalaryMin))
                    .col(integer_null(Job::SalaryMax))
                    .col(date_null(Job::ApplicationDeadline))
                    .col(timestamp_null(Job::PublishedAt))
                    .col(timestamp_null(Job::ClosedAt))
                    .col(integer(Job::CreatedById))
                    .col(
                        timestamp(Job::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Job::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_created_by_id")
                            .from(Job::Table, Job::CreatedById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_job_status")
                    .table(Job::Table)
                    .col(Job::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Job {
    Table,
    Id,
    Title,
    Description,
    Requirements,
    Benefits,
    Department,
    Location,
    Status,
    JobType,
    ExperienceLevel,
    SalaryMin,
    SalaryMax,
    ApplicationDeadline,
    PublishedAt,
    ClosedAt,
    CreatedById,
    CreatedAt,
    UpdatedAt,
}
