//! Interview factory for creating test interviews.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test interviews with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::interview::InterviewFactory;
///
/// let interview = InterviewFactory::new(&db, application.id, interviewer.id, hr.id)
///     .scheduled_at(Utc::now() - Duration::days(1))
///     .status("completed")
///     .build()
///     .await?;
/// ```
pub struct InterviewFactory<'a> {
    db: &'a DatabaseConnection,
    job_application_id: i32,
    interviewer_id: i32,
    scheduled_by_id: i32,
    title: String,
    interview_type: String,
    status: String,
    scheduled_at: DateTime<Utc>,
}

impl<'a> InterviewFactory<'a> {
    /// Creates a new InterviewFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Interview {id}"`
    /// - interview_type: `"video"`
    /// - status: `"scheduled"`
    /// - scheduled_at: 1 day from now
    pub fn new(
        db: &'a DatabaseConnection,
        job_application_id: i32,
        interviewer_id: i32,
        scheduled_by_id: i32,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            job_application_id,
            interviewer_id,
            scheduled_by_id,
            title: format!("Interview {}", id),
            interview_type: "video".to_string(),
            status: "scheduled".to_string(),
            scheduled_at: Utc::now() + Duration::days(1),
        }
    }

    pub fn interview_type(mut self, interview_type: impl Into<String>) -> Self {
        self.interview_type = interview_type.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn scheduled_at(mut self, scheduled_at: DateTime<Utc>) -> Self {
        self.scheduled_at = scheduled_at;
        self
    }

    /// Builds and inserts the interview entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::interview::Model)` - Created interview entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::interview::Model, DbErr> {
        let now = Utc::now();
        entity::interview::ActiveModel {
            job_application_id: ActiveValue::Set(self.job_application_id),
            interviewer_id: ActiveValue::Set(self.interviewer_id),
            scheduled_by_id: ActiveValue::Set(self.scheduled_by_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            interview_type: ActiveValue::Set(self.interview_type),
            status: ActiveValue::Set(self.status),
            scheduled_at: ActiveValue::Set(self.scheduled_at),
            end_time: ActiveValue::Set(None),
            location: ActiveValue::Set(None),
            meeting_link: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            score: ActiveValue::Set(None),
            feedback: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scheduled interview one day from now.
pub async fn create_interview(
    db: &DatabaseConnection,
    job_application_id: i32,
    interviewer_id: i32,
    scheduled_by_id: i32,
) -> Result<entity::interview::Model, DbErr> {
    InterviewFactory::new(db, job_application_id, interviewer_id, scheduled_by_id)
        .build()
        .await
}
