//! Application factory for creating test job applications.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test applications with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::job_application::ApplicationFactory;
///
/// let application = ApplicationFactory::new(&db, job.id, applicant.id)
///     .status("shortlisted")
///     .build()
///     .await?;
/// ```
pub struct ApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    job_id: i32,
    applicant_id: i32,
    status: String,
    cover_letter: Option<String>,
    submitted_at: DateTime<Utc>,
}

impl<'a> ApplicationFactory<'a> {
    /// Creates a new ApplicationFactory with default values.
    ///
    /// Defaults:
    /// - status: `"submitted"`
    /// - cover_letter: `Some("Test cover letter")`
    /// - submitted_at: now
    pub fn new(db: &'a DatabaseConnection, job_id: i32, applicant_id: i32) -> Self {
        Self {
            db,
            job_id,
            applicant_id,
            status: "submitted".to_string(),
            cover_letter: Some("Test cover letter".to_string()),
            submitted_at: Utc::now(),
        }
    }

    /// Sets a raw status without touching review or withdrawal timestamps.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn cover_letter(mut self, cover_letter: Option<String>) -> Self {
        self.cover_letter = cover_letter;
        self
    }

    /// Sets both `submitted_at` and `created_at`.
    pub fn submitted_at(mut self, submitted_at: DateTime<Utc>) -> Self {
        self.submitted_at = submitted_at;
        self
    }

    /// Builds and inserts the application entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::job_application::Model)` - Created application entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::job_application::Model, DbErr> {
        entity::job_application::ActiveModel {
            job_id: ActiveValue::Set(self.job_id),
            applicant_id: ActiveValue::Set(self.applicant_id),
            status: ActiveValue::Set(self.status),
            cover_letter: ActiveValue::Set(self.cover_letter),
            resume: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            score: ActiveValue::Set(None),
            submitted_at: ActiveValue::Set(self.submitted_at),
            reviewed_at: ActiveValue::Set(None),
            reviewed_by_id: ActiveValue::Set(None),
            withdrawn_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.submitted_at),
            updated_at: ActiveValue::Set(self.submitted_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a submitted application with default values.
///
/// Shorthand for `ApplicationFactory::new(db, job_id, applicant_id).build().await`.
pub async fn create_application(
    db: &DatabaseConnection,
    job_id: i32,
    applicant_id: i32,
) -> Result<entity::job_application::Model, DbErr> {
    ApplicationFactory::new(db, job_id, applicant_id)
        .build()
        .await
}
