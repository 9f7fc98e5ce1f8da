//! Reporting aggregates and CSV exports.
//!
//! Every report is recomputed from the live tables on each call. Bucketing by day or
//! month happens in Rust over raw timestamps so the queries stay portable.

use std::collections::BTreeMap;

use chrono::Utc;
use csv::{QuoteStyle, WriterBuilder};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        application::ApplicationStatus, document::DocumentStatus, document::DocumentType,
        job::JobStatus,
    },
    server::{
        data::{
            document::DocumentRepository, interview::InterviewRepository, job::JobRepository,
            report::ReportRepository,
        },
        error::{internal::InternalError, AppError},
        model::report::{
            bucket_by, month_start_before, ApplicationReport, DashboardAnalytics,
            DashboardTotals, DateRange, DepartmentStats, DocumentReport, ExportKind,
            HiringPipeline, DAY_FORMAT, MONTH_FORMAT,
        },
    },
};

/// Months covered by the dashboard's monthly series, including the current one.
const DASHBOARD_MONTHS: u32 = 6;

const APPLICATION_EXPORT_HEADERS: [&str; 5] =
    ["ID", "Applicant Email", "Job Title", "Status", "Applied Date"];
const JOB_EXPORT_HEADERS: [&str; 5] = ["ID", "Title", "Department", "Status", "Created Date"];

/// CSV document produced by an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: &'static str,
    pub content: String,
}

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds headline totals, the monthly application series and the status breakdown.
    pub async fn dashboard(&self) -> Result<DashboardAnalytics, AppError> {
        let now = Utc::now();
        let jobs = JobRepository::new(self.db);
        let documents = DocumentRepository::new(self.db);
        let interviews = InterviewRepository::new(self.db);
        let reports = ReportRepository::new(self.db);

        let status_counts = reports
            .application_status_counts(DateRange::default())
            .await?;
        let count_of = |status: ApplicationStatus| {
            status_counts
                .iter()
                .find(|(s, _)| *s == status)
                .map_or(0, |(_, count)| *count)
        };

        let totals = DashboardTotals {
            jobs: jobs.count_all().await?,
            active_jobs: jobs.count_by_status(JobStatus::Published).await?
                + jobs.count_by_status(JobStatus::Active).await?,
            applications: status_counts.iter().map(|(_, count)| count).sum(),
            pending_applications: count_of(ApplicationStatus::Submitted),
            documents: documents.count_all().await?,
            pending_documents: documents.count_by_status(DocumentStatus::Pending).await?,
            interviews: interviews.count_all().await?,
            upcoming_interviews: interviews.count_upcoming(now).await?,
        };

        let since = DateRange {
            start: Some(month_start_before(now, DASHBOARD_MONTHS - 1)),
            end: None,
        };
        let submissions = reports.application_submission_times(since).await?;

        let applications_by_status = status_counts
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(status, count)| (status.as_str().to_string(), *count))
            .collect::<BTreeMap<_, _>>();

        Ok(DashboardAnalytics {
            totals,
            monthly_applications: bucket_by(&submissions, MONTH_FORMAT),
            applications_by_status,
        })
    }

    /// Summarizes applications submitted within `range` with a daily series.
    pub async fn application_stats(&self, range: DateRange) -> Result<ApplicationReport, AppError> {
        let reports = ReportRepository::new(self.db);
        let counts = reports.application_status_counts(range).await?;
        let count_of = |status: ApplicationStatus| {
            counts
                .iter()
                .find(|(s, _)| *s == status)
                .map_or(0, |(_, count)| *count)
        };
        let submissions = reports.application_submission_times(range).await?;

        Ok(ApplicationReport {
            total: counts.iter().map(|(_, count)| count).sum(),
            new: count_of(ApplicationStatus::Submitted),
            in_review: count_of(ApplicationStatus::UnderReview),
            accepted: count_of(ApplicationStatus::Accepted),
            rejected: count_of(ApplicationStatus::Rejected),
            daily: bucket_by(&submissions, DAY_FORMAT),
        })
    }

    pub async fn hiring_pipeline(&self) -> Result<HiringPipeline, AppError> {
        let counts = ReportRepository::new(self.db)
            .application_status_counts(DateRange::default())
            .await?;
        let count_of = |status: ApplicationStatus| {
            counts
                .iter()
                .find(|(s, _)| *s == status)
                .map_or(0, |(_, count)| *count)
        };

        Ok(HiringPipeline {
            applied: count_of(ApplicationStatus::Submitted),
            screening: count_of(ApplicationStatus::UnderReview),
            interview: count_of(ApplicationStatus::Interviewing),
            offer: count_of(ApplicationStatus::Offered),
            hired: count_of(ApplicationStatus::Accepted),
        })
    }

    pub async fn document_stats(&self) -> Result<DocumentReport, AppError> {
        let repo = DocumentRepository::new(self.db);

        let mut by_type = BTreeMap::new();
        for doc_type in DocumentType::ALL.iter().copied() {
            let count = repo.count_by_type(doc_type).await?;
            if count > 0 {
                by_type.insert(doc_type.as_str().to_string(), count);
            }
        }

        Ok(DocumentReport {
            total: repo.count_all().await?,
            pending: repo.count_by_status(DocumentStatus::Pending).await?,
            approved: repo.count_by_status(DocumentStatus::Approved).await?,
            rejected: repo.count_by_status(DocumentStatus::Rejected).await?,
            by_type,
        })
    }

    /// Job and application counts per department, sorted by department name.
    pub async fn department_stats(&self) -> Result<Vec<DepartmentStats>, AppError> {
        let reports = ReportRepository::new(self.db);

        let mut departments: BTreeMap<String, (u64, u64)> = BTreeMap::new();
        for department in reports.job_departments().await? {
            departments.entry(department).or_default().0 += 1;
        }
        for department in reports.application_departments().await? {
            departments.entry(department).or_default().1 += 1;
        }

        Ok(departments
            .into_iter()
            .map(|(department, (jobs, applications))| DepartmentStats {
                department,
                jobs,
                applications,
            })
            .collect())
    }

    /// Renders the requested dataset as CSV with every field quoted.
    ///
    /// # Returns
    /// - `Ok(CsvExport)` - File name and CSV text
    /// - `Err(InternalError::CsvEncoding)` - CSV writer failed
    pub async fn export(&self, kind: ExportKind, range: DateRange) -> Result<CsvExport, AppError> {
        let reports = ReportRepository::new(self.db);

        let records: Vec<[String; 5]> = match kind {
            ExportKind::Applications => reports
                .application_export_rows(range)
                .await?
                .into_iter()
                .map(|row| {
                    [
                        row.id.to_string(),
                        row.applicant_email,
                        row.job_title,
                        row.status,
                        row.submitted_at.format(DAY_FORMAT).to_string(),
                    ]
                })
                .collect(),
            ExportKind::Jobs => reports
                .job_export_rows(range)
                .await?
                .into_iter()
                .map(|row| {
                    [
                        row.id.to_string(),
                        row.title,
                        row.department,
                        row.status,
                        row.created_at.format(DAY_FORMAT).to_string(),
                    ]
                })
                .collect(),
        };
        let headers = match kind {
            ExportKind::Applications => APPLICATION_EXPORT_HEADERS,
            ExportKind::Jobs => JOB_EXPORT_HEADERS,
        };

        let content = encode_csv(&headers, &records)?;
        tracing::info!("Exported {} rows to {}", records.len(), kind.file_name());

        Ok(CsvExport {
            file_name: kind.file_name(),
            content,
        })
    }
}

fn encode_csv(headers: &[&str], records: &[[String; 5]]) -> Result<String, InternalError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer
        .write_record(headers)
        .map_err(|e| InternalError::CsvEncoding(e.to_string()))?;
    for record in records {
        writer
            .write_record(record)
            .map_err(|e| InternalError::CsvEncoding(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| InternalError::CsvEncoding(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| InternalError::CsvEncoding(e.to_string()))
}
