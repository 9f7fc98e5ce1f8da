use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        report::{
            ApplicationReportDto, DashboardAnalyticsDto, DateRangeQuery, DepartmentStatsDto,
            DocumentReportDto, HiringPipelineDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::report::{DateRange, DepartmentStats, ExportKind},
        service::report::ReportService,
        state::AppState,
    },
};

/// Tag for grouping reporting endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Dashboard totals, six-month application series and applications by status.
///
/// # Access Control
/// - `HrStaff`
#[utoipa::path(
    get,
    path = "/api/reports/analytics",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Dashboard analytics", body = DashboardAnalyticsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let analytics = ReportService::new(&state.db).dashboard().await?;

    Ok(Json(analytics.into_dto()))
}

/// Application counts and daily series within an optional date range.
///
/// # Access Control
/// - `HrStaff`
#[utoipa::path(
    get,
    path = "/api/reports/applications-stats",
    tag = REPORT_TAG,
    params(
        ("startDate" = Option<String>, Query, description = "First day included (YYYY-MM-DD)"),
        ("endDate" = Option<String>, Query, description = "Last day included (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Application report", body = ApplicationReportDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn application_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let report = ReportService::new(&state.db)
        .application_stats(DateRange::from_query(query)?)
        .await?;

    Ok(Json(report.into_dto()))
}

/// Applications at each hiring stage.
///
/// # Access Control
/// - `HrStaff`
#[utoipa::path(
    get,
    path = "/api/reports/hiring-pipeline",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Hiring pipeline", body = HiringPipelineDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn hiring_pipeline(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let pipeline = ReportService::new(&state.db).hiring_pipeline().await?;

    Ok(Json(pipeline.into_dto()))
}

/// Document counts by review status and by type.
///
/// # Access Control
/// - `HrStaff`
#[utoipa::path(
    get,
    path = "/api/reports/documents-stats",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Document report", body = DocumentReportDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn document_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let report = ReportService::new(&state.db).document_stats().await?;

    Ok(Json(report.into_dto()))
}

/// Job and application counts per department, sorted by department name.
///
/// # Access Control
/// - `HrStaff`
#[utoipa::path(
    get,
    path = "/api/reports/departments-stats",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Department statistics", body = Vec<DepartmentStatsDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn department_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let stats = ReportService::new(&state.db).department_stats().await?;

    Ok(Json(
        stats
            .into_iter()
            .map(DepartmentStats::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Download applications or jobs as CSV.
///
/// # Access Control
/// - `HrStaff`
///
/// # Arguments
/// - `kind` - `applications` or `jobs`
/// - `query` - Optional inclusive date range over submission or creation date
///
/// # Returns
/// - `200 OK` - `text/csv` attachment with every field quoted
/// - `400 Bad Request` - Unknown export kind
/// - `403 Forbidden` - Not HR staff
#[utoipa::path(
    get,
    path = "/api/reports/export/{type}",
    tag = REPORT_TAG,
    params(
        ("type" = String, Path, description = "applications or jobs"),
        ("startDate" = Option<String>, Query, description = "First day included (YYYY-MM-DD)"),
        ("endDate" = Option<String>, Query, description = "Last day included (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "CSV export", body = String, content_type = "text/csv"),
        (status = 400, description = "Unknown export kind", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(kind): Path<String>,
    Query(query): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let kind = kind
        .parse::<ExportKind>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let csv = ReportService::new(&state.db)
        .export(kind, DateRange::from_query(query)?)
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", csv.file_name),
            ),
        ],
        csv.content,
    ))
}
