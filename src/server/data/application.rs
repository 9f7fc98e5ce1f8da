//! Job application data repository for database operations.
//!
//! This module provides the `ApplicationRepository` for the application ledger. The
//! repository is generic over the connection type so that the bulk status update can run
//! every read and write through one open transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::{
    model::application::ApplicationStatus,
    server::model::application::{
        Application, ApplicationSearchParams, ApplicationStatusChange, CreateApplicationParams,
    },
};

pub struct ApplicationRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new application in `submitted` status with `submitted_at` set to now.
    ///
    /// # Returns
    /// - `Ok(Application)` - The created application
    /// - `Err(DbErr)` - Database error, including a unique violation on (job, applicant)
    pub async fn create(&self, params: CreateApplicationParams) -> Result<Application, DbErr> {
        let now = Utc::now();
        let entity = entity::job_application::ActiveModel {
            job_id: ActiveValue::Set(params.job_id),
            applicant_id: ActiveValue::Set(params.applicant_id),
            status: ActiveValue::Set(ApplicationStatus::Submitted.as_str().to_string()),
            cover_letter: ActiveValue::Set(params.cover_letter),
            resume: ActiveValue::Set(params.resume),
            notes: ActiveValue::Set(None),
            score: ActiveValue::Set(None),
            submitted_at: ActiveValue::Set(now),
            reviewed_at: ActiveValue::Set(None),
            reviewed_by_id: ActiveValue::Set(None),
            withdrawn_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Application::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Application>, DbErr> {
        entity::prelude::JobApplication::find_by_id(id)
            .one(self.db)
            .await?
            .map(Application::from_entity)
            .transpose()
    }

    /// Loads every application whose ID is in `ids`, in no particular order.
    pub async fn find_many(&self, ids: &[i32]) -> Result<Vec<Application>, DbErr> {
        entity::prelude::JobApplication::find()
            .filter(entity::job_application::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(Application::from_entity)
            .collect()
    }

    /// Checks whether the applicant has already applied to the job.
    pub async fn exists_for(&self, job_id: i32, applicant_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::JobApplication::find()
            .filter(entity::job_application::Column::JobId.eq(job_id))
            .filter(entity::job_application::Column::ApplicantId.eq(applicant_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists a job's applications, newest submission first.
    ///
    /// # Arguments
    /// - `job_id` - Job whose applications to list
    /// - `status` - Optional status filter
    /// - `limit` - Maximum rows to return; all rows when `None`
    /// - `offset` - Rows to skip
    ///
    /// # Returns
    /// - `Ok((applications, total))` - Requested slice and the total matching the filter
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_for_job(
        &self,
        job_id: i32,
        status: Option<ApplicationStatus>,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<(Vec<Application>, u64), DbErr> {
        let mut query = entity::prelude::JobApplication::find()
            .filter(entity::job_application::Column::JobId.eq(job_id));
        if let Some(status) = status {
            query = query.filter(entity::job_application::Column::Status.eq(status.as_str()));
        }

        let total = query.clone().count(self.db).await?;
        let applications = query
            .order_by_desc(entity::job_application::Column::SubmittedAt)
            .order_by_desc(entity::job_application::Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await?
            .into_iter()
            .map(Application::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((applications, total))
    }

    /// Lists an applicant's own applications, newest submission first.
    pub async fn list_for_applicant(&self, applicant_id: i32) -> Result<Vec<Application>, DbErr> {
        entity::prelude::JobApplication::find()
            .filter(entity::job_application::Column::ApplicantId.eq(applicant_id))
            .order_by_desc(entity::job_application::Column::SubmittedAt)
            .order_by_desc(entity::job_application::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Application::from_entity)
            .collect()
    }

    /// Searches applications across jobs, newest submission first.
    ///
    /// The term matches applicant full name, applicant email or job title as a `LIKE`
    /// substring. Date bounds apply to `submitted_at` and are inclusive calendar days.
    pub async fn search(&self, params: ApplicationSearchParams) -> Result<Vec<Application>, DbErr> {
        let mut query = entity::prelude::JobApplication::find();

        if let Some(term) = params.term {
            query = query
                .join(
                    JoinType::InnerJoin,
                    entity::job_application::Relation::Applicant.def(),
                )
                .join(JoinType::InnerJoin, entity::job_application::Relation::Job.def())
                .filter(
                    Condition::any()
                        .add(entity::user::Column::FullName.contains(term.as_str()))
                        .add(entity::user::Column::Email.contains(term.as_str()))
                        .add(entity::job::Column::Title.contains(term.as_str())),
                );
        }
        if let Some(status) = params.status {
            query = query.filter(entity::job_application::Column::Status.eq(status.as_str()));
        }
        if let Some(job_id) = params.job_id {
            query = query.filter(entity::job_application::Column::JobId.eq(job_id));
        }

        let range = params.submitted;
        if let Some(start) = range.start {
            query = query.filter(entity::job_application::Column::SubmittedAt.gte(start));
        }
        if let Some(end) = range.end {
            query = query.filter(entity::job_application::Column::SubmittedAt.lt(end));
        }

        query
            .order_by_desc(entity::job_application::Column::SubmittedAt)
            .order_by_desc(entity::job_application::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Application::from_entity)
            .collect()
    }

    /// Counts applications in each status, optionally restricted to one job.
    ///
    /// # Returns
    /// - `Ok(counts)` - One entry per status, in declaration order
    /// - `Err(DbErr)` - Database error during count queries
    pub async fn count_by_status(
        &self,
        job_id: Option<i32>,
    ) -> Result<Vec<(ApplicationStatus, u64)>, DbErr> {
        let mut counts = Vec::with_capacity(ApplicationStatus::ALL.len());
        for status in ApplicationStatus::ALL.iter().copied() {
            let mut query = entity::prelude::JobApplication::find()
                .filter(entity::job_application::Column::Status.eq(status.as_str()));
            if let Some(job_id) = job_id {
                query = query.filter(entity::job_application::Column::JobId.eq(job_id));
            }
            counts.push((status, query.count(self.db).await?));
        }
        Ok(counts)
    }

    /// Writes a computed status change to a single application.
    ///
    /// # Returns
    /// - `Ok(Application)` - The updated application
    /// - `Err(DbErr::RecordNotUpdated)` - No application with that ID
    /// - `Err(DbErr)` - Other database error
    pub async fn apply_status_change(
        &self,
        id: i32,
        change: ApplicationStatusChange,
    ) -> Result<Application, DbErr> {
        let entity = entity::job_application::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(change.status.as_str().to_string()),
            notes: ActiveValue::Set(change.notes),
            reviewed_at: ActiveValue::Set(change.reviewed_at),
            reviewed_by_id: ActiveValue::Set(change.reviewed_by_id),
            withdrawn_at: ActiveValue::Set(change.withdrawn_at),
            updated_at: ActiveValue::Set(change.updated_at),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Application::from_entity(entity)
    }
}
