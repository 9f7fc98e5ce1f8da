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
                    .table(Document::Table)
                    .if_not_exists()
                    .col(pk_auto(Document::Id))
                    .col(string(Document::Filename))
                    .col(string(Document::OriginalName))
                    .col(string(Document::MimeType))
                    .col(big_integer(Document::Size))
                    .col(string(Document::Url))
                    .col(string(Document::DocType).default("other"))
                    .col(string(Document::Status).default("pending"))
                    .col(text_null(Document::Description))
                    .col(text_null(Document::ReviewNotes))
                    .col(integer(Document::UploadedById))
                    .col(integer_null(Document::JobApplicationId))
                    .col(integer_null(Document::ReviewedById))
                    .col(timestamp_null(Document::ReviewedAt))
                    .col(
                        timestamp(Document::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Document::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_uploaded_by_id")
                            .from(Document::Table, Document::UploadedById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_reviewed_by_id")
                            .from(Document::Table, Document::ReviewedById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_job_application_id")
                            .from(Document::Table, Document::JobApplicationId)
                            .to(JobApplication::Table, JobApplication::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Document {
    Table,
    Id,
    Filename,
    OriginalName,
    MimeType,
    Size,
    Url,
    DocType,
    Status,
    Description,
    ReviewNotes,
    UploadedById,
    JobApplicationId,
    ReviewedById,
    ReviewedAt,
    CreatedAt,
    UpdatedAt,
}
