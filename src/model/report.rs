use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeriodCountDto {
    /// `YYYY-MM` for monthly buckets, `YYYY-MM-DD` for daily buckets.
    pub period: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTotalsDto {
    pub jobs: u64,
    pub active_jobs: u64,
    pub applications: u64,
    pub pending_applications: u64,
    pub documents: u64,
    pub pending_documents: u64,
    pub interviews: u64,
    pub upcoming_interviews: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAnalyticsDto {
    pub totals: DashboardTotalsDto,
    pub monthly_applications: Vec<PeriodCountDto>,
    pub applications_by_status: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationReportDto {
    pub total: u64,
    pub new: u64,
    pub in_review: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub daily: Vec<PeriodCountDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HiringPipelineDto {
    pub applied: u64,
    pub screening: u64,
    pub interview: u64,
    pub offer: u64,
    pub hired: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReportDto {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
    pub by_type: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStatsDto {
    pub department: String,
    pub jobs: u64,
    pub applications: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
