use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{AffectedDto, ErrorDto},
        application::{
            ApplicationDto, ApplicationSearchQuery, ApplicationStatisticsDto,
            ApplicationStatisticsQuery, BulkUpdateApplicationsDto, CreateApplicationDto,
            UpdateApplicationStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::application::{
            Application, ApplicationSearchParams, BulkUpdateParams, CreateApplicationParams,
        },
        service::application::ApplicationService,
        state::AppState,
    },
};

/// Tag for grouping job application endpoints in OpenAPI documentation
pub static APPLICATION_TAG: &str = "application";

/// Search applications across all jobs.
///
/// Filters by a free-text term over applicant name, applicant email and job title, and by
/// status, job and submission date range. Newest first.
///
/// # Access Control
/// - `HrStaff`
///
/// # Returns
/// - `200 OK` - Matching applications
/// - `400 Bad Request` - `dateFrom` after `dateTo`
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not HR staff
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    params(
        ("q" = Option<String>, Query, description = "Applicant name, email or job title"),
        ("status" = Option<String>, Query, description = "Application status"),
        ("jobId" = Option<i32>, Query, description = "Job ID"),
        ("dateFrom" = Option<String>, Query, description = "Earliest submission date (YYYY-MM-DD)"),
        ("dateTo" = Option<String>, Query, description = "Latest submission date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Matching applications", body = Vec<ApplicationDto>),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_applications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ApplicationSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let applications = ApplicationService::new(&state.db)
        .search(ApplicationSearchParams::from_query(query)?)
        .await?;

    Ok(Json(into_dtos(applications)))
}

/// Apply to a job as the authenticated user.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - Application submitted
/// - `400 Bad Request` - Job is not accepting applications
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Job not found
/// - `409 Conflict` - Already applied to this job
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationDto),
        (status = 400, description = "Job not accepting applications", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 409, description = "Already applied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let application = ApplicationService::new(&state.db)
        .create(CreateApplicationParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(application.into_dto())))
}

/// Applications submitted by the authenticated user, newest first.
#[utoipa::path(
    get,
    path = "/api/applications/my-applications",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "Own applications", body = Vec<ApplicationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_applications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let applications = ApplicationService::new(&state.db)
        .list_for_applicant(user.id)
        .await?;

    Ok(Json(into_dtos(applications)))
}

/// Application counts by status, across all jobs or for one job.
///
/// # Access Control
/// - `HrStaff`
#[utoipa::path(
    get,
    path = "/api/applications/statistics",
    tag = APPLICATION_TAG,
    params(
        ("jobId" = Option<i32>, Query, description = "Restrict counts to one job")
    ),
    responses(
        (status = 200, description = "Application counts", body = ApplicationStatisticsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn application_statistics(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ApplicationStatisticsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let stats = ApplicationService::new(&state.db)
        .statistics(query.job_id)
        .await?;

    Ok(Json(stats.into_dto()))
}

/// Get an application by ID.
///
/// # Access Control
/// - `HrStaff` or the applicant who submitted it
///
/// # Returns
/// - `200 OK` - The application
/// - `403 Forbidden` - Neither HR staff nor the applicant
/// - `404 Not Found` - No application with that ID
#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "The application", body = ApplicationDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to view", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto)
    ),
)]
pub async fn get_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let application = ApplicationService::new(&state.db).get(id, &user).await?;

    Ok(Json(application.into_dto()))
}

/// Move an application through the review pipeline.
///
/// Entering `reviewed` stamps the reviewer and review time. Notes are replaced only when
/// provided. The applicant is notified.
///
/// # Access Control
/// - `HrStaff`
///
/// # Returns
/// - `200 OK` - Updated application
/// - `400 Bad Request` - Target is `withdrawn`
/// - `404 Not Found` - No application with that ID
/// - `409 Conflict` - Transition not allowed
#[utoipa::path(
    patch,
    path = "/api/applications/{id}/status",
    tag = APPLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    request_body = UpdateApplicationStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApplicationDto),
        (status = 400, description = "Status not settable by HR", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto)
    ),
)]
pub async fn update_application_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateApplicationStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let application = ApplicationService::new(&state.db)
        .update_status(id, payload.status, payload.notes, &user)
        .await?;

    Ok(Json(application.into_dto()))
}

/// Withdraw one of the caller's own applications.
///
/// # Access Control
/// - The applicant who submitted it
///
/// # Returns
/// - `200 OK` - Withdrawn application with `withdrawnAt` stamped
/// - `403 Forbidden` - Caller is not the applicant
/// - `404 Not Found` - No application with that ID
/// - `409 Conflict` - Already in a terminal status
#[utoipa::path(
    post,
    path = "/api/applications/{id}/withdraw",
    tag = APPLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Application withdrawn", body = ApplicationDto),
        (status = 403, description = "Not the applicant", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto)
    ),
)]
pub async fn withdraw_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let application = ApplicationService::new(&state.db)
        .withdraw(id, &user)
        .await?;

    Ok(Json(application.into_dto()))
}

/// Apply one status change to many applications atomically.
///
/// Either every listed application moves or none do.
///
/// # Access Control
/// - `HrStaff`
///
/// # Returns
/// - `200 OK` - Number of applications updated
/// - `400 Bad Request` - Empty ID list or missing status
/// - `404 Not Found` - Any listed application missing
/// - `409 Conflict` - Any transition not allowed
#[utoipa::path(
    patch,
    path = "/api/applications/bulk-update",
    tag = APPLICATION_TAG,
    request_body = BulkUpdateApplicationsDto,
    responses(
        (status = 200, description = "Applications updated", body = AffectedDto),
        (status = 400, description = "Invalid bulk request", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto)
    ),
)]
pub async fn bulk_update_applications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BulkUpdateApplicationsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let params = BulkUpdateParams {
        application_ids: payload.application_ids,
        status: payload.status,
        notes: payload.notes,
        actor_id: user.id,
    };

    let affected = ApplicationService::new(&state.db)
        .bulk_update(params)
        .await?;

    Ok(Json(AffectedDto { affected }))
}

fn into_dtos(applications: Vec<Application>) -> Vec<ApplicationDto> {
    applications
        .into_iter()
        .map(Application::into_dto)
        .collect()
}
