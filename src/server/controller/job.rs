use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        application::{ApplicationListDto, ApplicationStatisticsDto, JobApplicationsQuery},
        job::{
            CreateJobDto, JobDto, JobFilterQuery, JobSearchQuery, JobStatisticsDto, UpdateJobDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::job::{CreateJobParams, Job, JobFilters, UpdateJobParams},
        service::{application::ApplicationService, job::JobService},
        state::AppState,
    },
};

/// Tag for grouping job posting endpoints in OpenAPI documentation
pub static JOB_TAG: &str = "job";

/// List job postings.
///
/// Returns every job matching the optional filters, newest first. Public.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional status, job type, department, location and experience filters
///
/// # Returns
/// - `200 OK` - Matching jobs
/// - `400 Bad Request` - Unknown filter value
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = JOB_TAG,
    params(
        ("status" = Option<String>, Query, description = "Job status"),
        ("jobType" = Option<String>, Query, description = "Job type"),
        ("department" = Option<String>, Query, description = "Exact department"),
        ("location" = Option<String>, Query, description = "Location substring"),
        ("experienceLevel" = Option<String>, Query, description = "Experience level")
    ),
    responses(
        (status = 200, description = "Matching jobs", body = Vec<JobDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = JobService::new(&state.db);

    let jobs = service.list(JobFilters::from_query(query)).await?;

    Ok(Json(into_dtos(jobs)))
}

/// Create a draft job posting.
///
/// # Access Control
/// - `HrStaff` - Recruiters and HR managers/admins
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Job fields; the authenticated user becomes the creator
///
/// # Returns
/// - `201 Created` - Draft job
/// - `400 Bad Request` - Title, description, department or location blank
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not HR staff
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = JOB_TAG,
    request_body = CreateJobDto,
    responses(
        (status = 201, description = "Draft job created", body = JobDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateJobDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let service = JobService::new(&state.db);

    let job = service
        .create(CreateJobParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(job.into_dto())))
}

/// Search published jobs by title, description, department or location.
///
/// # Returns
/// - `200 OK` - Matching published jobs
/// - `400 Bad Request` - Empty search term
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/jobs/search",
    tag = JOB_TAG,
    params(
        ("q" = String, Query, description = "Case-insensitive search term")
    ),
    responses(
        (status = 200, description = "Matching published jobs", body = Vec<JobDto>),
        (status = 400, description = "Empty search term", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = JobService::new(&state.db);

    let jobs = service.search(&query.q).await?;

    Ok(Json(into_dtos(jobs)))
}

/// Job counts by status.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/jobs/statistics",
    tag = JOB_TAG,
    responses(
        (status = 200, description = "Job counts by status", body = JobStatisticsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn job_statistics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let stats = JobService::new(&state.db).statistics().await?;

    Ok(Json(stats.into_dto()))
}

/// Get a job posting by ID. Public.
///
/// # Returns
/// - `200 OK` - The job
/// - `404 Not Found` - No job with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "The job", body = JobDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let job = JobService::new(&state.db).get(id).await?;

    Ok(Json(job.into_dto()))
}

/// Update the descriptive fields of a job. Status is never changed here.
///
/// # Access Control
/// - `HrStaff`
///
/// # Returns
/// - `200 OK` - Updated job
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not HR staff
/// - `404 Not Found` - No job with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/jobs/{id}",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    request_body = UpdateJobDto,
    responses(
        (status = 200, description = "Updated job", body = JobDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateJobDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let job = JobService::new(&state.db)
        .update(id, UpdateJobParams::from_dto(payload))
        .await?;

    Ok(Json(job.into_dto()))
}

/// Permanently delete a job.
///
/// # Access Control
/// - `HrStaff`
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not HR staff
/// - `404 Not Found` - No job with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/jobs/{id}",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 204, description = "Job deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    JobService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Publish a draft or closed job.
///
/// # Access Control
/// - `HrStaff`
///
/// # Returns
/// - `200 OK` - Published job with `publishedAt` stamped
/// - `400 Bad Request` - Required fields blank
/// - `404 Not Found` - No job with that ID
/// - `409 Conflict` - Job cannot be published from its current status
#[utoipa::path(
    post,
    path = "/api/jobs/{id}/publish",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job published", body = JobDto),
        (status = 400, description = "Required fields blank", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto)
    ),
)]
pub async fn publish_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let job = JobService::new(&state.db).publish(id).await?;

    Ok(Json(job.into_dto()))
}

/// Close a published or active job. `publishedAt` is kept.
///
/// # Access Control
/// - `HrStaff`
#[utoipa::path(
    post,
    path = "/api/jobs/{id}/close",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job closed", body = JobDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto)
    ),
)]
pub async fn close_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let job = JobService::new(&state.db).close(id).await?;

    Ok(Json(job.into_dto()))
}

/// Mark a published job as actively recruiting.
///
/// # Access Control
/// - `HrStaff`
#[utoipa::path(
    post,
    path = "/api/jobs/{id}/activate",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job activated", body = JobDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto)
    ),
)]
pub async fn activate_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let job = JobService::new(&state.db).activate(id).await?;

    Ok(Json(job.into_dto()))
}

/// Archive a closed job.
///
/// # Access Control
/// - `HrStaff`
#[utoipa::path(
    post,
    path = "/api/jobs/{id}/archive",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job archived", body = JobDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto)
    ),
)]
pub async fn archive_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let job = JobService::new(&state.db).archive(id).await?;

    Ok(Json(job.into_dto()))
}

/// Cancel a job that has not been closed.
///
/// # Access Control
/// - `HrStaff`
#[utoipa::path(
    post,
    path = "/api/jobs/{id}/cancel",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job cancelled", body = JobDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto)
    ),
)]
pub async fn cancel_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let job = JobService::new(&state.db).cancel(id).await?;

    Ok(Json(job.into_dto()))
}

/// Applications received for a job, optionally filtered by status and paginated.
///
/// # Access Control
/// - `HrStaff`
///
/// # Returns
/// - `200 OK` - Page of applications with the unpaginated total
/// - `404 Not Found` - No job with that ID
#[utoipa::path(
    get,
    path = "/api/jobs/{id}/applications",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID"),
        ("status" = Option<String>, Query, description = "Application status"),
        ("limit" = Option<u64>, Query, description = "Maximum rows returned"),
        ("offset" = Option<u64>, Query, description = "Rows skipped")
    ),
    responses(
        (status = 200, description = "Applications for the job", body = ApplicationListDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn job_applications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(query): Query<JobApplicationsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let page = ApplicationService::new(&state.db)
        .list_for_job(id, query.status, query.limit, query.offset)
        .await?;

    Ok(Json(page.into_dto()))
}

/// Application counts by status for a single job.
///
/// # Access Control
/// - `HrStaff`
#[utoipa::path(
    get,
    path = "/api/jobs/{id}/applications/statistics",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Application counts", body = ApplicationStatisticsDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn job_application_statistics(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let stats = ApplicationService::new(&state.db).statistics(Some(id)).await?;

    Ok(Json(stats.into_dto()))
}

fn into_dtos(jobs: Vec<Job>) -> Vec<JobDto> {
    jobs.into_iter().map(Job::into_dto).collect()
}
