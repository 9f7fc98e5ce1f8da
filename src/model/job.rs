use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

string_enum! {
    pub enum JobStatus {
        Draft => "draft",
        Published => "published",
        Active => "active",
        Closed => "closed",
        Archived => "archived",
        Cancelled => "cancelled",
    }
}

string_enum! {
    pub enum JobType {
        FullTime => "full_time",
        PartTime => "part_time",
        Contract => "contract",
        Internship => "internship",
    }
}

string_enum! {
    pub enum ExperienceLevel {
        Entry => "entry",
        Junior => "junior",
        Mid => "mid",
        Senior => "senior",
        Lead => "lead",
        Executive => "executive",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
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

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobDto {
    pub title: String,
    pub description: String,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub department: String,
    pub location: String,
    pub job_type: Option<JobType>,
    pub experience_level: Option<ExperienceLevel>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub application_deadline: Option<NaiveDate>,
}

/// Partial update; absent fields are left unchanged. Status is changed only through the
/// transition endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobDto {
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

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilterQuery {
    pub status: Option<JobStatus>,
    pub job_type: Option<JobType>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobSearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobStatisticsDto {
    pub total: u64,
    pub draft: u64,
    pub published: u64,
    pub active: u64,
    pub closed: u64,
    pub archived: u64,
    pub cancelled: u64,
}
