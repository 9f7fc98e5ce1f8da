use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "interview")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub job_application_id: i32,
    pub interviewer_id: i32,
    pub scheduled_by_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// One of phone, video, in_person, panel, technical.
    #[sea_orm(default_value = "video")]
    pub interview_type: String,
    /// One of scheduled, completed, cancelled, rescheduled, no_show.
    #[sea_orm(default_value = "scheduled")]
    pub status: String,
    pub scheduled_at: DateTimeUtc,
    pub end_time: Option<DateTimeUtc>,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub score: Option<f64>,
    pub feedback: Option<Json>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::job_application::Entity",
        from = "Column::JobApplicationId",
        to = "super::job_application::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    JobApplication,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::InterviewerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Interviewer,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ScheduledById",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ScheduledBy,
}

impl Related<super::job_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
