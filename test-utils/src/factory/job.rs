//! Job factory for creating test job postings.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test jobs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::job::JobFactory;
///
/// let job = JobFactory::new(&db, hr.id)
///     .title("Backend Engineer")
///     .department("Engineering")
///     .published()
///     .build()
///     .await?;
/// ```
pub struct JobFactory<'a> {
    db: &'a DatabaseConnection,
    created_by_id: i32,
    title: String,
    description: String,
    department: String,
    location: String,
    status: String,
    job_type: String,
    experience_level: Option<String>,
    published_at: Option<DateTime<Utc>>,
    closed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl<'a> JobFactory<'a> {
    /// Creates a new JobFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Job {id}"`
    /// - description: `"Test job description"`
    /// - department: `"Engineering"`
    /// - location: `"Remote"`
    /// - status: `"draft"` with no publish or close timestamps
    /// - job_type: `"full_time"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `created_by_id` - ID of the user creating the job
    ///
    /// # Returns
    /// - `JobFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, created_by_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            created_by_id,
            title: format!("Job {}", id),
            description: "Test job description".to_string(),
            department: "Engineering".to_string(),
            location: "Remote".to_string(),
            status: "draft".to_string(),
            job_type: "full_time".to_string(),
            experience_level: None,
            published_at: None,
            closed_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = job_type.into();
        self
    }

    pub fn experience_level(mut self, experience_level: impl Into<String>) -> Self {
        self.experience_level = Some(experience_level.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets a raw status without touching timestamps.
    ///
    /// Prefer `published()` or `closed()` when the test relies on the timestamp invariant.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Marks the job as published, stamping `published_at`.
    pub fn published(mut self) -> Self {
        self.status = "published".to_string();
        self.published_at = Some(Utc::now());
        self.closed_at = None;
        self
    }

    /// Marks the job as closed, stamping both `published_at` and `closed_at`.
    pub fn closed(mut self) -> Self {
        let now = Utc::now();
        self.status = "closed".to_string();
        self.published_at = Some(now);
        self.closed_at = Some(now);
        self
    }

    /// Builds and inserts the job entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::job::Model)` - Created job entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::job::Model, DbErr> {
        entity::job::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            requirements: ActiveValue::Set(None),
            benefits: ActiveValue::Set(None),
            department: ActiveValue::Set(self.department),
            location: ActiveValue::Set(self.location),
            status: ActiveValue::Set(self.status),
            job_type: ActiveValue::Set(self.job_type),
            experience_level: ActiveValue::Set(self.experience_level),
            salary_min: ActiveValue::Set(None),
            salary_max: ActiveValue::Set(None),
            application_deadline: ActiveValue::Set(None),
            published_at: ActiveValue::Set(self.published_at),
            closed_at: ActiveValue::Set(self.closed_at),
            created_by_id: ActiveValue::Set(self.created_by_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a draft job with default values.
///
/// Shorthand for `JobFactory::new(db, created_by_id).build().await`.
pub async fn create_job(
    db: &DatabaseConnection,
    created_by_id: i32,
) -> Result<entity::job::Model, DbErr> {
    JobFactory::new(db, created_by_id).build().await
}
