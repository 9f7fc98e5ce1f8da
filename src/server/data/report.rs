//! Read-only aggregate queries backing the reporting endpoints.
//!
//! Plain per-status counts live on the owning repositories; this repository holds the
//! queries that span tables or need raw column values for bucketing and export.

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::{
    model::application::ApplicationStatus,
    server::model::report::{ApplicationExportRow, DateRange, JobExportRow},
};

pub struct ReportRepository<'a> {
    db: &'a DatabaseConnection,
}

/// Applications submitted within `range`.
fn applications_in(range: DateRange) -> Select<entity::job_application::Entity> {
    let mut query = entity::prelude::JobApplication::find();
    if let Some(start) = range.start {
        query = query.filter(entity::job_application::Column::SubmittedAt.gte(start));
    }
    if let Some(end) = range.end {
        query = query.filter(entity::job_application::Column::SubmittedAt.lt(end));
    }
    query
}

impl<'a> ReportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submission times of applications within `range`, oldest first.
    pub async fn application_submission_times(
        &self,
        range: DateRange,
    ) -> Result<Vec<DateTime<Utc>>, DbErr> {
        applications_in(range)
            .select_only()
            .column(entity::job_application::Column::SubmittedAt)
            .order_by_asc(entity::job_application::Column::SubmittedAt)
            .into_tuple::<DateTime<Utc>>()
            .all(self.db)
            .await
    }

    /// Counts applications within `range` in each status.
    pub async fn application_status_counts(
        &self,
        range: DateRange,
    ) -> Result<Vec<(ApplicationStatus, u64)>, DbErr> {
        let mut counts = Vec::with_capacity(ApplicationStatus::ALL.len());
        for status in ApplicationStatus::ALL.iter().copied() {
            let count = applications_in(range)
                .filter(entity::job_application::Column::Status.eq(status.as_str()))
                .count(self.db)
                .await?;
            counts.push((status, count));
        }
        Ok(counts)
    }

    /// Department of every job, one entry per job.
    pub async fn job_departments(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Job::find()
            .select_only()
            .column(entity::job::Column::Department)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Department of the job behind every application, one entry per application.
    pub async fn application_departments(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::JobApplication::find()
            .select_only()
            .column(entity::job::Column::Department)
            .join(JoinType::InnerJoin, entity::job_application::Relation::Job.def())
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Applications submitted within `range` joined with applicant email and job title.
    pub async fn application_export_rows(
        &self,
        range: DateRange,
    ) -> Result<Vec<ApplicationExportRow>, DbErr> {
        let rows = applications_in(range)
            .select_only()
            .column(entity::job_application::Column::Id)
            .column(entity::user::Column::Email)
            .column(entity::job::Column::Title)
            .column(entity::job_application::Column::Status)
            .column(entity::job_application::Column::SubmittedAt)
            .join(
                JoinType::InnerJoin,
                entity::job_application::Relation::Applicant.def(),
            )
            .join(JoinType::InnerJoin, entity::job_application::Relation::Job.def())
            .order_by_asc(entity::job_application::Column::Id)
            .into_tuple::<(i32, String, String, String, DateTime<Utc>)>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(
                |(id, applicant_email, job_title, status, submitted_at)| ApplicationExportRow {
                    id,
                    applicant_email,
                    job_title,
                    status,
                    submitted_at,
                },
            )
            .collect())
    }

    /// Jobs created within `range`.
    pub async fn job_export_rows(&self, range: DateRange) -> Result<Vec<JobExportRow>, DbErr> {
        let mut query = entity::prelude::Job::find();
        if let Some(start) = range.start {
            query = query.filter(entity::job::Column::CreatedAt.gte(start));
        }
        if let Some(end) = range.end {
            query = query.filter(entity::job::Column::CreatedAt.lt(end));
        }

        let rows = query
            .order_by_asc(entity::job::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|job| JobExportRow {
                id: job.id,
                title: job.title,
                department: job.department,
                status: job.status,
                created_at: job.created_at,
            })
            .collect())
    }
}
