use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        interview::{
            CancelInterviewDto, InterviewDto, InterviewFeedbackDto, InterviewStatisticsDto,
            RescheduleInterviewDto, ScheduleInterviewDto, UpdateInterviewDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::interview::{
            Interview, InterviewFeedback, ScheduleInterviewParams, UpdateInterviewParams,
        },
        service::interview::InterviewService,
        state::AppState,
    },
};

/// Tag for grouping interview endpoints in OpenAPI documentation
pub static INTERVIEW_TAG: &str = "interview";

/// Schedule an interview for an application.
///
/// Title defaults to `Interview for <job title>` and type to `video`. The applicant is
/// notified.
///
/// # Access Control
/// - `ScheduleInterviews` - HR staff and interviewers
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Application, interviewer and timing details
///
/// # Returns
/// - `201 Created` - Interview scheduled
/// - `400 Bad Request` - End time not after start time
/// - `403 Forbidden` - Role can't schedule interviews
/// - `404 Not Found` - Application or interviewer not found
#[utoipa::path(
    post,
    path = "/api/interviews/schedule",
    tag = INTERVIEW_TAG,
    request_body = ScheduleInterviewDto,
    responses(
        (status = 201, description = "Interview scheduled", body = InterviewDto),
        (status = 400, description = "Invalid timing", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to schedule", body = ErrorDto),
        (status = 404, description = "Application or interviewer not found", body = ErrorDto)
    ),
)]
pub async fn schedule_interview(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ScheduleInterviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ScheduleInterviews])
        .await?;

    let interview = InterviewService::new(&state.db)
        .schedule(ScheduleInterviewParams::from_dto(user.id, payload), &user)
        .await?;

    Ok((StatusCode::CREATED, Json(interview.into_dto())))
}

/// Interviews visible to the caller, earliest first.
///
/// HR staff see every interview, interviewers see the ones assigned to them, and applicants
/// see the ones for their applications.
#[utoipa::path(
    get,
    path = "/api/interviews/my-interviews",
    tag = INTERVIEW_TAG,
    responses(
        (status = 200, description = "Visible interviews", body = Vec<InterviewDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_interviews(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let interviews = InterviewService::new(&state.db).list_for(&user).await?;

    Ok(Json(into_dtos(interviews)))
}

/// Future interviews still in `scheduled` status, scoped like `my-interviews`.
#[utoipa::path(
    get,
    path = "/api/interviews/upcoming/list",
    tag = INTERVIEW_TAG,
    responses(
        (status = 200, description = "Upcoming interviews", body = Vec<InterviewDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upcoming_interviews(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let interviews = InterviewService::new(&state.db).upcoming(&user).await?;

    Ok(Json(into_dtos(interviews)))
}

/// Interview counts by status.
///
/// # Access Control
/// - `HrStaff`
#[utoipa::path(
    get,
    path = "/api/interviews/statistics",
    tag = INTERVIEW_TAG,
    responses(
        (status = 200, description = "Interview counts", body = InterviewStatisticsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn interview_statistics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let stats = InterviewService::new(&state.db).statistics().await?;

    Ok(Json(stats.into_dto()))
}

/// Get an interview by ID.
///
/// # Access Control
/// - `HrStaff`, the assigned interviewer, or the applicant
#[utoipa::path(
    get,
    path = "/api/interviews/{id}",
    tag = INTERVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Interview ID")
    ),
    responses(
        (status = 200, description = "The interview", body = InterviewDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to view", body = ErrorDto),
        (status = 404, description = "Interview not found", body = ErrorDto)
    ),
)]
pub async fn get_interview(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let interview = InterviewService::new(&state.db).get(id, &user).await?;

    Ok(Json(interview.into_dto()))
}

/// Update descriptive interview fields. Status is never changed here.
///
/// # Access Control
/// - `HrStaff`
///
/// # Returns
/// - `200 OK` - Updated interview
/// - `404 Not Found` - Interview or new interviewer not found
#[utoipa::path(
    put,
    path = "/api/interviews/{id}",
    tag = INTERVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Interview ID")
    ),
    request_body = UpdateInterviewDto,
    responses(
        (status = 200, description = "Updated interview", body = InterviewDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 404, description = "Interview or interviewer not found", body = ErrorDto)
    ),
)]
pub async fn update_interview(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInterviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let interview = InterviewService::new(&state.db)
        .update(id, UpdateInterviewParams::from_dto(payload))
        .await?;

    Ok(Json(interview.into_dto()))
}

/// Cancel an interview, appending `Cancelled: <reason>` to its notes.
///
/// # Access Control
/// - `HrStaff`
///
/// # Returns
/// - `200 OK` - Cancelled interview
/// - `404 Not Found` - No interview with that ID
/// - `409 Conflict` - Interview already finished
#[utoipa::path(
    delete,
    path = "/api/interviews/{id}",
    tag = INTERVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Interview ID"),
        ("reason" = Option<String>, Query, description = "Cancellation reason")
    ),
    responses(
        (status = 200, description = "Interview cancelled", body = InterviewDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 404, description = "Interview not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto)
    ),
)]
pub async fn cancel_interview(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(query): Query<CancelInterviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let interview = InterviewService::new(&state.db)
        .cancel(id, query.reason.as_deref())
        .await?;

    Ok(Json(interview.into_dto()))
}

/// Submit feedback for an interview, completing it.
///
/// Stores `{notes, rating, recommendation}` as feedback and the rating as score.
///
/// # Access Control
/// - The assigned interviewer
///
/// # Returns
/// - `200 OK` - Completed interview
/// - `400 Bad Request` - Rating outside 1 to 5
/// - `403 Forbidden` - Caller is not the assigned interviewer
/// - `404 Not Found` - No interview with that ID
/// - `409 Conflict` - Interview can no longer be completed
#[utoipa::path(
    post,
    path = "/api/interviews/{id}/feedback",
    tag = INTERVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Interview ID")
    ),
    request_body = InterviewFeedbackDto,
    responses(
        (status = 200, description = "Feedback recorded", body = InterviewDto),
        (status = 400, description = "Rating out of range", body = ErrorDto),
        (status = 403, description = "Not the assigned interviewer", body = ErrorDto),
        (status = 404, description = "Interview not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto)
    ),
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<InterviewFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let interview = InterviewService::new(&state.db)
        .submit_feedback(id, InterviewFeedback::from_dto(payload), &user)
        .await?;

    Ok(Json(interview.into_dto()))
}

/// Move an interview to a new time.
///
/// # Access Control
/// - `ScheduleInterviews`
#[utoipa::path(
    post,
    path = "/api/interviews/{id}/reschedule",
    tag = INTERVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Interview ID")
    ),
    request_body = RescheduleInterviewDto,
    responses(
        (status = 200, description = "Interview rescheduled", body = InterviewDto),
        (status = 400, description = "Invalid timing", body = ErrorDto),
        (status = 403, description = "Not allowed to schedule", body = ErrorDto),
        (status = 404, description = "Interview not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto)
    ),
)]
pub async fn reschedule_interview(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<RescheduleInterviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ScheduleInterviews])
        .await?;

    let interview = InterviewService::new(&state.db)
        .reschedule(id, payload.scheduled_at, payload.end_time)
        .await?;

    Ok(Json(interview.into_dto()))
}

/// Record that the applicant did not attend.
///
/// # Access Control
/// - `ScheduleInterviews`
#[utoipa::path(
    post,
    path = "/api/interviews/{id}/no-show",
    tag = INTERVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Interview ID")
    ),
    responses(
        (status = 200, description = "Interview marked no-show", body = InterviewDto),
        (status = 403, description = "Not allowed to schedule", body = ErrorDto),
        (status = 404, description = "Interview not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto)
    ),
)]
pub async fn mark_no_show(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ScheduleInterviews])
        .await?;

    let interview = InterviewService::new(&state.db).mark_no_show(id).await?;

    Ok(Json(interview.into_dto()))
}

fn into_dtos(interviews: Vec<Interview>) -> Vec<InterviewDto> {
    interviews.into_iter().map(Interview::into_dto).collect()
}
