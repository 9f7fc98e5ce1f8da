use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

string_enum! {
    pub enum ApplicationStatus {
        Submitted => "submitted",
        Reviewed => "reviewed",
        UnderReview => "under_review",
        Shortlisted => "shortlisted",
        Interviewing => "interviewing",
        Offered => "offered",
        Accepted => "accepted",
        Hired => "hired",
        Rejected => "rejected",
        Withdrawn => "withdrawn",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
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

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationDto {
    pub job_id: i32,
    pub cover_letter: Option<String>,
    pub resume: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateApplicationStatusDto {
    pub status: ApplicationStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateApplicationsDto {
    pub application_ids: Vec<i32>,
    pub status: Option<ApplicationStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApplicationListDto {
    pub applications: Vec<ApplicationDto>,
    pub total: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobApplicationsQuery {
    pub status: Option<ApplicationStatus>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSearchQuery {
    pub q: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub job_id: Option<i32>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStatisticsQuery {
    pub job_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStatisticsDto {
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
