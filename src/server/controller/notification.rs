use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{AffectedDto, ErrorDto},
        notification::{
            CreateNotificationDto, NotificationDto, NotificationListQuery,
            PaginatedNotificationsDto, UnreadCountDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::notification::{CreateNotificationParams, NotificationListParams},
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Page through the caller's notifications, newest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `query` - Page (default 1), limit (default 20) and unread-only flag
///
/// # Returns
/// - `200 OK` - One page of notifications with totals
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number starting at 1"),
        ("limit" = Option<u64>, Query, description = "Notifications per page"),
        ("unreadOnly" = Option<bool>, Query, description = "Only unread notifications")
    ),
    responses(
        (status = 200, description = "Page of notifications", body = PaginatedNotificationsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NotificationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let page = NotificationService::new(&state.db)
        .list(user.id, NotificationListParams::from_query(query))
        .await?;

    Ok(Json(page.into_dto()))
}

/// Send a notification to a user.
///
/// # Access Control
/// - `HrManagement`
///
/// # Returns
/// - `201 Created` - Notification created
/// - `400 Bad Request` - Blank title or message
/// - `403 Forbidden` - Not HR management
#[utoipa::path(
    post,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    request_body = CreateNotificationDto,
    responses(
        (status = 201, description = "Notification created", body = NotificationDto),
        (status = 400, description = "Blank title or message", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not HR management", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrManagement])
        .await?;

    let notification = NotificationService::new(&state.db)
        .create(CreateNotificationParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(notification.into_dto())))
}

/// Number of unread notifications for the caller.
#[utoipa::path(
    get,
    path = "/api/notifications/count",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Unread count", body = UnreadCountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn unread_count(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let unread_count = NotificationService::new(&state.db)
        .unread_count(user.id)
        .await?;

    Ok(Json(UnreadCountDto { unread_count }))
}

/// Mark every unread notification of the caller as read.
#[utoipa::path(
    put,
    path = "/api/notifications/mark-all-read",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Notifications marked read", body = AffectedDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
)]
pub async fn mark_all_read(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let affected = NotificationService::new(&state.db)
        .mark_all_read(user.id)
        .await?;

    Ok(Json(AffectedDto { affected }))
}

/// Mark one of the caller's notifications as read.
///
/// # Returns
/// - `204 No Content` - Marked read
/// - `404 Not Found` - Missing or owned by another user
#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Notification marked read"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto)
    ),
)]
pub async fn mark_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    NotificationService::new(&state.db)
        .mark_read(id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete one of the caller's notifications.
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `404 Not Found` - Missing or owned by another user
#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    NotificationService::new(&state.db)
        .delete(id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
