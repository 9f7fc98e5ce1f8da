//! Job posting domain models, parameters and the job status machine.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::job::{
        CreateJobDto, ExperienceLevel, JobDto, JobFilterQuery, JobStatisticsDto, JobStatus,
        JobType, UpdateJobDto,
    },
    server::model::{lifecycle::StatusLifecycle, parse_column},
};

impl StatusLifecycle for JobStatus {
    const ENTITY: &'static str = "job";

    fn allowed_transitions(self) -> &'static [Self] {
        use JobStatus::*;
        match self {
            Draft => &[Published, Cancelled],
            Published => &[Active, Closed, Cancelled],
            Active => &[Closed, Cancelled],
            Closed => &[Published, Archived],
            Archived | Cancelled => &[],
        }
    }

    fn label(self) -> &'static str {
        self.as_str()
    }
}

impl JobStatus {
    /// Whether applicants may submit new applications against a job in this state.
    pub fn accepts_applications(self) -> bool {
        matches!(self, JobStatus::Published | JobStatus::Active)
    }
}

/// Publish and close timestamps a job must carry in a given status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobTimestamps {
    pub published_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
}

/// Job posting.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub department: String,
    pub location: String,
    pub status: JobStatus,
    pub job_type: JobType,
    pub experience_level: Option<ExperienceLevel>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub application_deadline: Option<NaiveDate>,
    pub published_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub created_by_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The job entity from the database
    ///
    /// # Returns
    /// - `Ok(Job)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored status, type or experience level is unknown
    pub fn from_entity(entity: entity::job::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            status: parse_column(&entity.status)?,
            job_type: parse_column(&entity.job_type)?,
            experience_level: entity
                .experience_level
                .as_deref()
                .map(parse_column)
                .transpose()?,
            title: entity.title,
            description: entity.description,
            requirements: entity.requirements,
            benefits: entity.benefits,
            department: entity.department,
            location: entity.location,
            salary_min: entity.salary_min,
            salary_max: entity.salary_max,
            application_deadline: entity.application_deadline,
            published_at: entity.published_at,
            closed_at: entity.closed_at,
            created_by_id: entity.created_by_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> JobDto {
        JobDto {
            id: self.id,
            title: self.title,
            description: self.description,
            requirements: self.requirements,
            benefits: self.benefits,
            department: self.department,
            location: self.location,
            status: self.status,
            job_type: self.job_type,
            experience_level: self.experience_level,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            application_deadline: self.application_deadline,
            published_at: self.published_at,
            closed_at: self.closed_at,
            created_by_id: self.created_by_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Names of the required posting fields that are blank.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        required_field_gaps(
            &self.title,
            &self.description,
            &self.department,
            &self.location,
        )
    }

    /// Timestamps the job must carry after entering `next`.
    ///
    /// Entering `published` stamps a fresh `published_at` and clears `closed_at`. Entering
    /// `active` or `closed` keeps the existing `published_at`, and `closed` stamps
    /// `closed_at`. Every other state carries neither timestamp.
    ///
    /// # Arguments
    /// - `next` - Target status
    /// - `now` - Time of the transition
    pub fn timestamps_for(&self, next: JobStatus, now: DateTime<Utc>) -> JobTimestamps {
        match next {
            JobStatus::Published => JobTimestamps {
                published_at: Some(now),
                closed_at: None,
            },
            JobStatus::Active => JobTimestamps {
                published_at: self.published_at.or(Some(now)),
                closed_at: None,
            },
            JobStatus::Closed => JobTimestamps {
                published_at: self.published_at.or(Some(now)),
                closed_at: Some(now),
            },
            JobStatus::Draft | JobStatus::Archived | JobStatus::Cancelled => JobTimestamps {
                published_at: None,
                closed_at: None,
            },
        }
    }
}

fn required_field_gaps(
    title: &str,
    description: &str,
    department: &str,
    location: &str,
) -> Vec<&'static str> {
    [
        ("title", title),
        ("description", description),
        ("department", department),
        ("location", location),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect()
}

/// Parameters for creating a draft job.
#[derive(Debug, Clone)]
pub struct CreateJobParams {
    pub title: String,
    pub description: String,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub department: String,
    pub location: String,
    pub job_type: JobType,
    pub experience_level: Option<ExperienceLevel>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub application_deadline: Option<NaiveDate>,
    pub created_by_id: i32,
}

impl CreateJobParams {
    pub fn from_dto(created_by_id: i32, dto: CreateJobDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            requirements: dto.requirements,
            benefits: dto.benefits,
            department: dto.department,
            location: dto.location,
            job_type: dto.job_type.unwrap_or(JobType::FullTime),
            experience_level: dto.experience_level,
            salary_min: dto.salary_min,
            salary_max: dto.salary_max,
            application_deadline: dto.application_deadline,
            created_by_id,
        }
    }

    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        required_field_gaps(
            &self.title,
            &self.description,
            &self.department,
            &self.location,
        )
    }
}

/// Partial update of a job's descriptive fields.
#[derive(Debug, Clone, Default)]
pub struct UpdateJobParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub experience_level: Option<ExperienceLevel>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub application_deadline: Option<NaiveDate>,
}

impl UpdateJobParams {
    /// Names of the required posting fields that are provided but blank.
    pub fn blank_required_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("description", &self.description),
            ("department", &self.department),
            ("location", &self.location),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_some_and(|v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect()
    }

    pub fn from_dto(dto: UpdateJobDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            requirements: dto.requirements,
            benefits: dto.benefits,
            department: dto.department,
            location: dto.location,
            job_type: dto.job_type,
            experience_level: dto.experience_level,
            salary_min: dto.salary_min,
            salary_max: dto.salary_max,
            application_deadline: dto.application_deadline,
        }
    }
}

/// Optional list filters; all present filters must match.
#[derive(Debug, Clone, Default)]
pub struct JobFilters {
    pub status: Option<JobStatus>,
    pub job_type: Option<JobType>,
    pub department: Option<String>,
    /// Case-insensitive substring match.
    pub location: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
}

impl JobFilters {
    pub fn from_query(query: JobFilterQuery) -> Self {
        Self {
            status: query.status,
            job_type: query.job_type,
            department: query.department,
            location: query.location,
            experience_level: query.experience_level,
        }
    }
}

/// Job counts by status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobStatistics {
    pub total: u64,
    pub draft: u64,
    pub published: u64,
    pub active: u64,
    pub closed: u64,
    pub archived: u64,
    pub cancelled: u64,
}

impl JobStatistics {
    pub fn into_dto(self) -> JobStatisticsDto {
        JobStatisticsDto {
            total: self.total,
            draft: self.draft,
            published: self.published,
            active: self.active,
            closed: self.closed,
            archived: self.archived,
            cancelled: self.cancelled,
        }
    }
}
