//! Reporting aggregates and export formats.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use std::{collections::BTreeMap, str::FromStr};

use crate::model::{
    api::UnknownVariant,
    report::{
        ApplicationReportDto, DashboardAnalyticsDto, DashboardTotalsDto, DateRangeQuery,
        DepartmentStatsDto, DocumentReportDto, HiringPipelineDto, PeriodCountDto,
    },
};
use crate::server::error::AppError;

/// Half-open UTC interval `[start, end)` derived from inclusive calendar dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn from_query(query: DateRangeQuery) -> Result<Self, AppError> {
        Self::from_dates(query.start_date, query.end_date)
    }

    /// # Returns
    /// - `Ok(DateRange)` - Range ending at midnight after `end`
    /// - `Err(AppError::BadRequest)` - `end` is the last representable day
    pub fn from_dates(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, AppError> {
        let end = end
            .map(|date| {
                start_of_day(date)
                    .checked_add_signed(Duration::days(1))
                    .ok_or_else(|| AppError::BadRequest("endDate out of range".to_string()))
            })
            .transpose()?;

        Ok(Self {
            start: start.map(start_of_day),
            end,
        })
    }
}

/// Midnight UTC on `date`.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// First instant of the month `months_back` months before the month containing `now`.
pub fn month_start_before(now: DateTime<Utc>, months_back: u32) -> DateTime<Utc> {
    let total = now.year() * 12 + now.month0() as i32 - months_back as i32;
    let (year, month0) = (total.div_euclid(12), total.rem_euclid(12) as u32);
    let date = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap_or(now.date_naive());
    start_of_day(date)
}

/// Groups timestamps into periods formatted with `format`, sorted by period.
pub fn bucket_by(timestamps: &[DateTime<Utc>], format: &str) -> Vec<PeriodCount> {
    let mut buckets: BTreeMap<String, u64> = BTreeMap::new();
    for timestamp in timestamps {
        *buckets.entry(timestamp.format(format).to_string()).or_default() += 1;
    }
    buckets
        .into_iter()
        .map(|(period, count)| PeriodCount { period, count })
        .collect()
}

pub const MONTH_FORMAT: &str = "%Y-%m";
pub const DAY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodCount {
    pub period: String,
    pub count: u64,
}

impl PeriodCount {
    pub fn into_dto(self) -> PeriodCountDto {
        PeriodCountDto {
            period: self.period,
            count: self.count,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardTotals {
    pub jobs: u64,
    pub active_jobs: u64,
    pub applications: u64,
    pub pending_applications: u64,
    pub documents: u64,
    pub pending_documents: u64,
    pub interviews: u64,
    pub upcoming_interviews: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardAnalytics {
    pub totals: DashboardTotals,
    pub monthly_applications: Vec<PeriodCount>,
    pub applications_by_status: BTreeMap<String, u64>,
}

impl DashboardAnalytics {
    pub fn into_dto(self) -> DashboardAnalyticsDto {
        let totals = self.totals;
        DashboardAnalyticsDto {
            totals: DashboardTotalsDto {
                jobs: totals.jobs,
                active_jobs: totals.active_jobs,
                applications: totals.applications,
                pending_applications: totals.pending_applications,
                documents: totals.documents,
                pending_documents: totals.pending_documents,
                interviews: totals.interviews,
                upcoming_interviews: totals.upcoming_interviews,
            },
            monthly_applications: self
                .monthly_applications
                .into_iter()
                .map(PeriodCount::into_dto)
                .collect(),
            applications_by_status: self.applications_by_status,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationReport {
    pub total: u64,
    pub new: u64,
    pub in_review: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub daily: Vec<PeriodCount>,
}

impl ApplicationReport {
    pub fn into_dto(self) -> ApplicationReportDto {
        ApplicationReportDto {
            total: self.total,
            new: self.new,
            in_review: self.in_review,
            accepted: self.accepted,
            rejected: self.rejected,
            daily: self.daily.into_iter().map(PeriodCount::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiringPipeline {
    pub applied: u64,
    pub screening: u64,
    pub interview: u64,
    pub offer: u64,
    pub hired: u64,
}

impl HiringPipeline {
    pub fn into_dto(self) -> HiringPipelineDto {
        HiringPipelineDto {
            applied: self.applied,
            screening: self.screening,
            interview: self.interview,
            offer: self.offer,
            hired: self.hired,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentReport {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
    pub by_type: BTreeMap<String, u64>,
}

impl DocumentReport {
    pub fn into_dto(self) -> DocumentReportDto {
        DocumentReportDto {
            total: self.total,
            pending: self.pending,
            approved: self.approved,
            rejected: self.rejected,
            by_type: self.by_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentStats {
    pub department: String,
    pub jobs: u64,
    pub applications: u64,
}

impl DepartmentStats {
    pub fn into_dto(self) -> DepartmentStatsDto {
        DepartmentStatsDto {
            department: self.department,
            jobs: self.jobs,
            applications: self.applications,
        }
    }
}

/// Dataset offered by the CSV export endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Applications,
    Jobs,
}

impl ExportKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ExportKind::Applications => "applications.csv",
            ExportKind::Jobs => "jobs.csv",
        }
    }
}

impl FromStr for ExportKind {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "applications" => Ok(ExportKind::Applications),
            "jobs" => Ok(ExportKind::Jobs),
            other => Err(UnknownVariant {
                kind: "ExportKind",
                value: other.to_string(),
            }),
        }
    }
}

/// One row of the applications export.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationExportRow {
    pub id: i32,
    pub applicant_email: String,
    pub job_title: String,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
}

/// One row of the jobs export.
#[derive(Debug, Clone, PartialEq)]
pub struct JobExportRow {
    pub id: i32,
    pub title: String,
    pub department: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
