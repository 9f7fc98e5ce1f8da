//! Job data repository for database operations.
//!
//! This module provides the `JobRepository` for managing job postings: creation, filtered
//! listing, public search, descriptive updates, status writes with their timestamps, and
//! per-status counts.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::job::JobStatus,
    server::model::job::{CreateJobParams, Job, JobFilters, JobTimestamps, UpdateJobParams},
};

pub struct JobRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new job in `draft` status.
    ///
    /// # Arguments
    /// - `params` - Job fields and creator ID
    ///
    /// # Returns
    /// - `Ok(Job)` - The created draft
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateJobParams) -> Result<Job, DbErr> {
        let now = Utc::now();
        let entity = entity::job::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            requirements: ActiveValue::Set(params.requirements),
            benefits: ActiveValue::Set(params.benefits),
            department: ActiveValue::Set(params.department),
            location: ActiveValue::Set(params.location),
            status: ActiveValue::Set(JobStatus::Draft.as_str().to_string()),
            job_type: ActiveValue::Set(params.job_type.as_str().to_string()),
            experience_level: ActiveValue::Set(
                params.experience_level.map(|level| level.as_str().to_string()),
            ),
            salary_min: ActiveValue::Set(params.salary_min),
            salary_max: ActiveValue::Set(params.salary_max),
            application_deadline: ActiveValue::Set(params.application_deadline),
            published_at: ActiveValue::Set(None),
            closed_at: ActiveValue::Set(None),
            created_by_id: ActiveValue::Set(params.created_by_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Job::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Job>, DbErr> {
        entity::prelude::Job::find_by_id(id)
            .one(self.db)
            .await?
            .map(Job::from_entity)
            .transpose()
    }

    /// Lists jobs matching every present filter, newest first.
    ///
    /// Department matches exactly; location matches as a substring (`LIKE`, which SQLite
    /// compares case-insensitively).
    pub async fn list(&self, filters: JobFilters) -> Result<Vec<Job>, DbErr> {
        let mut query = entity::prelude::Job::find();

        if let Some(status) = filters.status {
            query = query.filter(entity::job::Column::Status.eq(status.as_str()));
        }
        if let Some(job_type) = filters.job_type {
            query = query.filter(entity::job::Column::JobType.eq(job_type.as_str()));
        }
        if let Some(department) = filters.department.filter(|d| !d.is_empty()) {
            query = query.filter(entity::job::Column::Department.eq(department));
        }
        if let Some(location) = filters.location.filter(|l| !l.is_empty()) {
            query = query.filter(entity::job::Column::Location.contains(location));
        }
        if let Some(level) = filters.experience_level {
            query = query.filter(entity::job::Column::ExperienceLevel.eq(level.as_str()));
        }

        query
            .order_by_desc(entity::job::Column::CreatedAt)
            .order_by_desc(entity::job::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Job::from_entity)
            .collect()
    }

    /// Searches published jobs by a case-insensitive substring over title, description,
    /// department and location, newest first.
    pub async fn search_published(&self, term: &str) -> Result<Vec<Job>, DbErr> {
        entity::prelude::Job::find()
            .filter(entity::job::Column::Status.eq(JobStatus::Published.as_str()))
            .filter(
                Condition::any()
                    .add(entity::job::Column::Title.contains(term))
                    .add(entity::job::Column::Description.contains(term))
                    .add(entity::job::Column::Department.contains(term))
                    .add(entity::job::Column::Location.contains(term)),
            )
            .order_by_desc(entity::job::Column::CreatedAt)
            .order_by_desc(entity::job::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Job::from_entity)
            .collect()
    }

    /// Applies a partial update of descriptive fields. Status is never touched.
    ///
    /// # Returns
    /// - `Ok(Job)` - The updated job
    /// - `Err(DbErr::RecordNotFound)` - No job with that ID
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, id: i32, params: UpdateJobParams) -> Result<Job, DbErr> {
        let job = entity::prelude::Job::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Job with id {} not found", id)))?;

        let mut active_model: entity::job::ActiveModel = job.into();
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(requirements) = params.requirements {
            active_model.requirements = ActiveValue::Set(Some(requirements));
        }
        if let Some(benefits) = params.benefits {
            active_model.benefits = ActiveValue::Set(Some(benefits));
        }
        if let Some(department) = params.department {
            active_model.department = ActiveValue::Set(department);
        }
        if let Some(location) = params.location {
            active_model.location = ActiveValue::Set(location);
        }
        if let Some(job_type) = params.job_type {
            active_model.job_type = ActiveValue::Set(job_type.as_str().to_string());
        }
        if let Some(level) = params.experience_level {
            active_model.experience_level = ActiveValue::Set(Some(level.as_str().to_string()));
        }
        if let Some(salary_min) = params.salary_min {
            active_model.salary_min = ActiveValue::Set(Some(salary_min));
        }
        if let Some(salary_max) = params.salary_max {
            active_model.salary_max = ActiveValue::Set(Some(salary_max));
        }
        if let Some(deadline) = params.application_deadline {
            active_model.application_deadline = ActiveValue::Set(Some(deadline));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Job::from_entity(active_model.update(self.db).await?)
    }

    /// Writes a new status together with the publish and close timestamps it requires.
    ///
    /// Callers validate the transition first.
    pub async fn set_status(
        &self,
        id: i32,
        status: JobStatus,
        timestamps: JobTimestamps,
    ) -> Result<Job, DbErr> {
        let entity = entity::job::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status.as_str().to_string()),
            published_at: ActiveValue::Set(timestamps.published_at),
            closed_at: ActiveValue::Set(timestamps.closed_at),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Job::from_entity(entity)
    }

    /// Deletes a job; its applications cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Job deleted
    /// - `Ok(false)` - No job with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Job::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Job::find().count(self.db).await
    }

    pub async fn count_by_status(&self, status: JobStatus) -> Result<u64, DbErr> {
        entity::prelude::Job::find()
            .filter(entity::job::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }
}
