//! Job application domain models, parameters and the application status machine.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::application::{
        ApplicationDto, ApplicationListDto, ApplicationSearchQuery, ApplicationStatisticsDto,
        ApplicationStatus,
    },
    server::{
        error::AppError,
        model::{lifecycle::StatusLifecycle, parse_column, report::DateRange},
    },
};

impl StatusLifecycle for ApplicationStatus {
    const ENTITY: &'static str = "application";

    fn allowed_transitions(self) -> &'static [Self] {
        use ApplicationStatus::*;
        match self {
            Submitted => &[Reviewed, UnderReview, Shortlisted, Rejected, Withdrawn],
            Reviewed => &[UnderReview, Shortlisted, Interviewing, Rejected, Withdrawn],
            UnderReview => &[Reviewed, Shortlisted, Interviewing, Rejected, Withdrawn],
            Shortlisted => &[Interviewing, Offered, Rejected, Withdrawn],
            Interviewing => &[Offered, Rejected, Withdrawn],
            Offered => &[Accepted, Rejected, Withdrawn],
            Accepted => &[Hired, Withdrawn],
            Hired | Rejected | Withdrawn => &[],
        }
    }

    fn label(self) -> &'static str {
        self.as_str()
    }
}

/// Application submitted by an applicant against a job.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: i32,
    pub job_id: i32,
    pub applicant_id: i32,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub resume: Option<String>,
    pub notes: Option<String>,
    pub score: Option<f64>,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by_id: Option<i32>,
    pub withdrawn_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Application {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Application)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored status is unknown
    pub fn from_entity(entity: entity::job_application::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            job_id: entity.job_id,
            applicant_id: entity.applicant_id,
            status: parse_column(&entity.status)?,
            cover_letter: entity.cover_letter,
            resume: entity.resume,
            notes: entity.notes,
            score: entity.score,
            submitted_at: entity.submitted_at,
            reviewed_at: entity.reviewed_at,
            reviewed_by_id: entity.reviewed_by_id,
            withdrawn_at: entity.withdrawn_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ApplicationDto {
        ApplicationDto {
            id: self.id,
            job_id: self.job_id,
            applicant_id: self.applicant_id,
            status: self.status,
            cover_letter: self.cover_letter,
            resume: self.resume,
            notes: self.notes,
            score: self.score,
            submitted_at: self.submitted_at,
            reviewed_at: self.reviewed_at,
            reviewed_by_id: self.reviewed_by_id,
            withdrawn_at: self.withdrawn_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Computes the row update for moving this application to `next`.
    ///
    /// Entering `reviewed` stamps the reviewer and review time; any earlier review stamp
    /// is otherwise kept. Entering `withdrawn` stamps `withdrawn_at`. Notes are replaced
    /// only when provided.
    ///
    /// # Arguments
    /// - `next` - Target status, already validated against the transition table
    /// - `notes` - Replacement notes, if any
    /// - `actor_id` - User performing the change
    /// - `now` - Time of the change
    pub fn status_change(
        &self,
        next: ApplicationStatus,
        notes: Option<String>,
        actor_id: i32,
        now: DateTime<Utc>,
    ) -> ApplicationStatusChange {
        let (reviewed_at, reviewed_by_id) = if next == ApplicationStatus::Reviewed {
            (Some(now), Some(actor_id))
        } else {
            (self.reviewed_at, self.reviewed_by_id)
        };

        ApplicationStatusChange {
            status: next,
            notes: notes.or_else(|| self.notes.clone()),
            reviewed_at,
            reviewed_by_id,
            withdrawn_at: (next == ApplicationStatus::Withdrawn).then_some(now),
            updated_at: now,
        }
    }
}

/// Column values written by a status change.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationStatusChange {
    pub status: ApplicationStatus,
    pub notes: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by_id: Option<i32>,
    pub withdrawn_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateApplicationParams {
    pub job_id: i32,
    pub applicant_id: i32,
    pub cover_letter: Option<String>,
    pub resume: Option<String>,
}

impl CreateApplicationParams {
    pub fn from_dto(applicant_id: i32, dto: crate::model::application::CreateApplicationDto) -> Self {
        Self {
            job_id: dto.job_id,
            applicant_id,
            cover_letter: dto.cover_letter,
            resume: dto.resume,
        }
    }
}

/// Search filters over applications; all present filters must match.
#[derive(Debug, Clone, Default)]
pub struct ApplicationSearchParams {
    /// Case-insensitive substring over applicant name, applicant email and job title.
    pub term: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub job_id: Option<i32>,
    pub submitted: DateRange,
}

impl ApplicationSearchParams {
    /// # Returns
    /// - `Ok(ApplicationSearchParams)` - Filters with an inclusive submission date range
    /// - `Err(AppError::BadRequest)` - `dateFrom` is after `dateTo`, or `dateTo` is out of range
    pub fn from_query(query: ApplicationSearchQuery) -> Result<Self, AppError> {
        if let (Some(from), Some(to)) = (query.date_from, query.date_to) {
            if from > to {
                return Err(AppError::BadRequest(
                    "dateFrom must not be after dateTo".to_string(),
                ));
            }
        }

        Ok(Self {
            term: query.q.filter(|q| !q.trim().is_empty()),
            status: query.status,
            job_id: query.job_id,
            submitted: DateRange::from_dates(query.date_from, query.date_to)?,
        })
    }
}

/// Parameters for an all-or-nothing bulk status change.
#[derive(Debug, Clone)]
pub struct BulkUpdateParams {
    pub application_ids: Vec<i32>,
    pub status: Option<ApplicationStatus>,
    pub notes: Option<String>,
    pub actor_id: i32,
}

/// One page of applications plus the unpaged total.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationPage {
    pub applications: Vec<Application>,
    pub total: u64,
}

impl ApplicationPage {
    pub fn into_dto(self) -> ApplicationListDto {
        ApplicationListDto {
            applications: self.applications.into_iter().map(Application::into_dto).collect(),
            total: self.total,
        }
    }
}

/// Application counts by status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationStatistics {
    pub total: u64,
    pub submitted: u64,
    pub reviewed: u64,
    pub under_review: u64,
    pub shortlisted: u64,
    pub interviewing: u64,
    pub offered: u64,
    pub accepted: u64,
    pub hired: u64,
    pub rejected: u64,
    pub withdrawn: u64,
}

impl ApplicationStatistics {
    /// Builds statistics from per-status counts.
    pub fn from_counts(counts: &[(ApplicationStatus, u64)]) -> Self {
        let mut stats = Self::default();
        for (status, count) in counts.iter().copied() {
            stats.total += count;
            let slot = match status {
                ApplicationStatus::Submitted => &mut stats.submitted,
                ApplicationStatus::Reviewed => &mut stats.reviewed,
                ApplicationStatus::UnderReview => &mut stats.under_review,
                ApplicationStatus::Shortlisted => &mut stats.shortlisted,
                ApplicationStatus::Interviewing => &mut stats.interviewing,
                ApplicationStatus::Offered => &mut stats.offered,
                ApplicationStatus::Accepted => &mut stats.accepted,
                ApplicationStatus::Hired => &mut stats.hired,
                ApplicationStatus::Rejected => &mut stats.rejected,
                ApplicationStatus::Withdrawn => &mut stats.withdrawn,
            };
            *slot += count;
        }
        stats
    }

    pub fn into_dto(self) -> ApplicationStatisticsDto {
        ApplicationStatisticsDto {
            total: self.total,
            submitted: self.submitted,
            reviewed: self.reviewed,
            under_review: self.under_review,
            shortlisted: self.shortlisted,
            interviewing: self.interviewing,
            offered: self.offered,
            accepted: self.accepted,
            hired: self.hired,
            rejected: self.rejected,
            withdrawn: self.withdrawn,
        }
    }
}
