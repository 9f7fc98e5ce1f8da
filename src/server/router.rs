//! Route table, API documentation and HTTP middleware.

use std::time::Duration;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::{
            application, auth, document, health, interview, job, notification, report,
        },
        error::ErrorDetail,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Hireflow API", description = "Applicant tracking backend"),
    tags(
        (name = "health", description = "Liveness"),
        (name = "auth", description = "Signup, login and token refresh"),
        (name = "job", description = "Job postings and their lifecycle"),
        (name = "application", description = "Job applications and review pipeline"),
        (name = "document", description = "Uploaded documents and review"),
        (name = "interview", description = "Interview scheduling and feedback"),
        (name = "notification", description = "Per-user notification mailbox"),
        (name = "report", description = "Analytics and CSV exports")
    )
)]
struct ApiDoc;

/// Builds the application router with every API route, Swagger UI at `/api/docs`, and
/// CORS, tracing and timeout layers.
///
/// In development mode 500 responses also carry the internal error text in `detail`.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let development = state.environment.is_development();

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::signup))
        .routes(routes!(auth::login))
        .routes(routes!(auth::refresh))
        .routes(routes!(auth::me))
        .routes(routes!(job::list_jobs, job::create_job))
        .routes(routes!(job::search_jobs))
        .routes(routes!(job::job_statistics))
        .routes(routes!(job::get_job, job::update_job, job::delete_job))
        .routes(routes!(job::publish_job))
        .routes(routes!(job::close_job))
        .routes(routes!(job::activate_job))
        .routes(routes!(job::archive_job))
        .routes(routes!(job::cancel_job))
        .routes(routes!(job::job_applications))
        .routes(routes!(job::job_application_statistics))
        .routes(routes!(
            application::search_applications,
            application::create_application
        ))
        .routes(routes!(application::my_applications))
        .routes(routes!(application::application_statistics))
        .routes(routes!(application::bulk_update_applications))
        .routes(routes!(application::get_application))
        .routes(routes!(application::update_application_status))
        .routes(routes!(application::withdraw_application))
        .routes(routes!(document::upload_document))
        .routes(routes!(document::my_documents))
        .routes(routes!(document::all_documents))
        .routes(routes!(document::application_documents))
        .routes(routes!(document::get_document, document::delete_document))
        .routes(routes!(document::review_document))
        .routes(routes!(interview::schedule_interview))
        .routes(routes!(interview::my_interviews))
        .routes(routes!(interview::upcoming_interviews))
        .routes(routes!(interview::interview_statistics))
        .routes(routes!(
            interview::get_interview,
            interview::update_interview,
            interview::cancel_interview
        ))
        .routes(routes!(interview::submit_feedback))
        .routes(routes!(interview::reschedule_interview))
        .routes(routes!(interview::mark_no_show))
        .routes(routes!(
            notification::list_notifications,
            notification::create_notification
        ))
        .routes(routes!(notification::unread_count))
        .routes(routes!(notification::mark_all_read))
        .routes(routes!(notification::mark_read))
        .routes(routes!(notification::delete_notification))
        .routes(routes!(report::dashboard))
        .routes(routes!(report::application_stats))
        .routes(routes!(report::hiring_pipeline))
        .routes(routes!(report::document_stats))
        .routes(routes!(report::department_stats))
        .routes(routes!(report::export))
        .split_for_parts();

    let mut router = routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .with_state(state);

    if development {
        router = router.layer(middleware::map_response(attach_error_detail));
    }

    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Rewrites 500 bodies to include the error text recorded by `InternalServerError`.
async fn attach_error_detail(response: Response) -> Response {
    let Some(ErrorDetail(detail)) = response.extensions().get::<ErrorDetail>().cloned() else {
        return response;
    };

    let status = response.status();
    let body = ErrorDto {
        error: "Internal server error".to_string(),
        detail: Some(detail),
    };

    let mut response = Json(body).into_response();
    *response.status_mut() = status;
    response
}
