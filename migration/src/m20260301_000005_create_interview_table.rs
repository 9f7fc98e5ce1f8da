use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User,
    m20260301_000003_create_job_application_table::JobApplication,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Interview::Table)
                    .if_not_exists()
                    .col(pk_auto(Interview::Id))
                    .col(integer(Interview::JobApplicationId))
                    .col(integer(Interview::InterviewerId))
                    .col(integer(Interview::ScheduledById))
                    .col(string(Interview::Title))
                    .col(text_null(Interview::Description))
                    .col(string(Interview::InterviewType).default("video"))
                    .col(string(Interview::Status).default("scheduled"))
                    .col(timestamp(Interview::ScheduledAt))
                    .col(timestamp_null(Interview::EndTime))
                    .col(string_null(Interview::Location))
                    .col(string_null(Interview::MeetingLink))
                    .col(text_null(Interview::Notes))
                    .col(double_null(Interview::Score))
                    .col(json_null(Interview::Feedback))
                    .col(
                        timestamp(Interview::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Interview::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interview_job_application_id")
                            .from(Interview::Table, Interview::JobApplicationId)
                            .to(JobApplication::Table, JobApplication::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interview_interviewer_id")
                            .from(Interview::Table, Interview::InterviewerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interview_scheduled_by_id")
                            .from(Interview::Table, Interview::ScheduledById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Interview::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Interview {
    Table,
    Id,
    JobApplicationId,
    InterviewerId,
    ScheduledById,
    Title,
    Description,
    InterviewType,
    Status,
    ScheduledAt,
    EndTime,
    Location,
    MeetingLink,
    Notes,
    Score,
    Feedback,
    CreatedAt,
    UpdatedAt,
}
