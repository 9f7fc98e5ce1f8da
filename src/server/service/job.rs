//! Job catalog business logic.
//!
//! `JobService` enforces who may create jobs, validates postings, and drives the job
//! status machine. Every status change derives the publish and close timestamps from the
//! target status so they always agree with it.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::job::JobStatus,
    server::{
        data::{job::JobRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            job::{CreateJobParams, Job, JobFilters, JobStatistics, UpdateJobParams},
            lifecycle::StatusLifecycle,
        },
    },
};

pub struct JobService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a draft job.
    ///
    /// # Returns
    /// - `Ok(Job)` - The created draft
    /// - `Err(AppError::NotFound)` - Creator doesn't exist
    /// - `Err(AuthError::AccessDenied)` - Creator lacks an HR role
    /// - `Err(AppError::BadRequest)` - A required field is blank
    pub async fn create(&self, params: CreateJobParams) -> Result<Job, AppError> {
        let creator = UserRepository::new(self.db)
            .find_by_id(params.created_by_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        if !creator.role.is_hr_staff() {
            return Err(AuthError::AccessDenied(
                creator.id,
                "Only HR staff can create jobs".to_string(),
            )
            .into());
        }

        let missing = params.missing_required_fields();
        if !missing.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let job = JobRepository::new(self.db).create(params).await?;
        tracing::info!("Job {} created by user {}", job.id, creator.id);
        Ok(job)
    }

    pub async fn list(&self, filters: JobFilters) -> Result<Vec<Job>, AppError> {
        Ok(JobRepository::new(self.db).list(filters).await?)
    }

    /// Searches published jobs.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Term is blank
    pub async fn search(&self, term: &str) -> Result<Vec<Job>, AppError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(AppError::BadRequest("Search term is required".to_string()));
        }

        Ok(JobRepository::new(self.db).search_published(term).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Job, AppError> {
        JobRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job not found".to_string()))
    }

    pub async fn statistics(&self) -> Result<JobStatistics, AppError> {
        let repo = JobRepository::new(self.db);

        Ok(JobStatistics {
            total: repo.count_all().await?,
            draft: repo.count_by_status(JobStatus::Draft).await?,
            published: repo.count_by_status(JobStatus::Published).await?,
            active: repo.count_by_status(JobStatus::Active).await?,
            closed: repo.count_by_status(JobStatus::Closed).await?,
            archived: repo.count_by_status(JobStatus::Archived).await?,
            cancelled: repo.count_by_status(JobStatus::Cancelled).await?,
        })
    }

    /// Updates descriptive fields; never changes status.
    ///
    /// # Returns
    /// - `Ok(Job)` - The updated job
    /// - `Err(AppError::BadRequest)` - A required field was provided blank
    /// - `Err(AppError::NotFound)` - No job with that ID
    pub async fn update(&self, id: i32, params: UpdateJobParams) -> Result<Job, AppError> {
        let blank = params.blank_required_fields();
        if !blank.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Required fields cannot be blank: {}",
                blank.join(", ")
            )));
        }

        let repo = JobRepository::new(self.db);
        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Job not found".to_string()));
        }

        Ok(repo.update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !JobRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Job not found".to_string()));
        }
        Ok(())
    }

    /// Moves a job to `published`. Refuses postings with blank required fields.
    pub async fn publish(&self, id: i32) -> Result<Job, AppError> {
        self.transition(id, JobStatus::Published).await
    }

    pub async fn activate(&self, id: i32) -> Result<Job, AppError> {
        self.transition(id, JobStatus::Active).await
    }

    pub async fn close(&self, id: i32) -> Result<Job, AppError> {
        self.transition(id, JobStatus::Closed).await
    }

    pub async fn archive(&self, id: i32) -> Result<Job, AppError> {
        self.transition(id, JobStatus::Archived).await
    }

    pub async fn cancel(&self, id: i32) -> Result<Job, AppError> {
        self.transition(id, JobStatus::Cancelled).await
    }

    /// Validates and applies a single status step.
    ///
    /// # Returns
    /// - `Ok(Job)` - The job in its new status
    /// - `Err(AppError::NotFound)` - No job with that ID
    /// - `Err(AppError::TransitionErr)` - Step not allowed from the current status
    /// - `Err(AppError::BadRequest)` - Publishing a posting with blank required fields
    async fn transition(&self, id: i32, next: JobStatus) -> Result<Job, AppError> {
        let repo = JobRepository::new(self.db);
        let job = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

        job.status.ensure_transition(next)?;

        if next == JobStatus::Published {
            let missing = job.missing_required_fields();
            if !missing.is_empty() {
                return Err(AppError::BadRequest(format!(
                    "Cannot publish job with missing fields: {}",
                    missing.join(", ")
                )));
            }
        }

        let timestamps = job.timestamps_for(next, Utc::now());
        let updated = repo.set_status(id, next, timestamps).await?;

        tracing::info!("Job {} moved from {} to {}", id, job.status, next);
        Ok(updated)
    }
}
