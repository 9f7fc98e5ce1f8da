use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "document")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub url: String,
    /// One of resume, cover_letter, portfolio, certificate, id_document, other.
    #[sea_orm(default_value = "other")]
    pub doc_type: String,
    /// One of pending, approved, rejected, requires_update.
    #[sea_orm(default_value = "pending")]
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub review_notes: Option<String>,
    pub uploaded_by_id: i32,
    pub job_application_id: Option<i32>,
    pub reviewed_by_id: Option<i32>,
    pub reviewed_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UploadedById",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    UploadedBy,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ReviewedById",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    ReviewedBy,
    #[sea_orm(
        belongs_to = "super::job_application::Entity",
        from = "Column::JobApplicationId",
        to = "super::job_application::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    JobApplication,
}

impl Related<super::job_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
