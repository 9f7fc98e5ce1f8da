use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        document::{DocumentDto, DocumentFilterQuery, ReviewDocumentDto, UploadDocumentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::document::{Document, DocumentFilters, UploadDocumentParams},
        service::document::DocumentService,
        state::AppState,
    },
};

/// Tag for grouping document endpoints in OpenAPI documentation
pub static DOCUMENT_TAG: &str = "document";

/// Register metadata for a document the caller has uploaded to file storage.
///
/// The document starts `pending` with no reviewer.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - File metadata and an optional application to attach it to
///
/// # Returns
/// - `201 Created` - Document recorded
/// - `400 Bad Request` - Blank filename or URL, or negative size
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Referenced application does not exist
#[utoipa::path(
    post,
    path = "/api/documents/upload",
    tag = DOCUMENT_TAG,
    request_body = UploadDocumentDto,
    responses(
        (status = 201, description = "Document recorded", body = DocumentDto),
        (status = 400, description = "Invalid document metadata", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UploadDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let document = DocumentService::new(&state.db)
        .upload(UploadDocumentParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(document.into_dto())))
}

/// Documents uploaded by the caller, newest first.
#[utoipa::path(
    get,
    path = "/api/documents/my-documents",
    tag = DOCUMENT_TAG,
    responses(
        (status = 200, description = "Own documents", body = Vec<DocumentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_documents(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let documents = DocumentService::new(&state.db).list_mine(user.id).await?;

    Ok(Json(into_dtos(documents)))
}

/// Every document, optionally filtered by status, type or uploader.
///
/// # Access Control
/// - `HrStaff`
#[utoipa::path(
    get,
    path = "/api/documents/all",
    tag = DOCUMENT_TAG,
    params(
        ("status" = Option<String>, Query, description = "Review status"),
        ("type" = Option<String>, Query, description = "Document type"),
        ("uploadedBy" = Option<i32>, Query, description = "Uploader user ID")
    ),
    responses(
        (status = 200, description = "Matching documents", body = Vec<DocumentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn all_documents(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DocumentFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let documents = DocumentService::new(&state.db)
        .list_all(DocumentFilters::from_query(query))
        .await?;

    Ok(Json(into_dtos(documents)))
}

/// Documents attached to one application.
///
/// # Access Control
/// - `HrStaff`
#[utoipa::path(
    get,
    path = "/api/documents/application/{id}",
    tag = DOCUMENT_TAG,
    params(
        ("id" = i32, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Attached documents", body = Vec<DocumentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn application_documents(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let documents = DocumentService::new(&state.db)
        .list_for_application(id)
        .await?;

    Ok(Json(into_dtos(documents)))
}

/// Get a document by ID.
///
/// # Access Control
/// - The uploader or `HrStaff`
///
/// # Returns
/// - `200 OK` - The document
/// - `403 Forbidden` - Neither uploader nor HR staff
/// - `404 Not Found` - No document with that ID
#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "The document", body = DocumentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to view", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto)
    ),
)]
pub async fn get_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let document = DocumentService::new(&state.db).get(id, &user).await?;

    Ok(Json(document.into_dto()))
}

/// Delete a document record.
///
/// # Access Control
/// - The uploader or `HrManagement`
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `403 Forbidden` - Neither uploader nor HR management
/// - `404 Not Found` - No document with that ID
#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    responses(
        (status = 204, description = "Document deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted to delete", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto)
    ),
)]
pub async fn delete_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    DocumentService::new(&state.db).delete(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Review a pending document.
///
/// Records the reviewer and review time and notifies the uploader.
///
/// # Access Control
/// - `HrStaff`
///
/// # Returns
/// - `200 OK` - Reviewed document
/// - `400 Bad Request` - Target status is `pending`
/// - `403 Forbidden` - Not HR staff
/// - `404 Not Found` - No document with that ID
/// - `409 Conflict` - Document already finally reviewed
#[utoipa::path(
    put,
    path = "/api/documents/{id}/status",
    tag = DOCUMENT_TAG,
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    request_body = ReviewDocumentDto,
    responses(
        (status = 200, description = "Document reviewed", body = DocumentDto),
        (status = 400, description = "Invalid review status", body = ErrorDto),
        (status = 403, description = "Not HR staff", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto)
    ),
)]
pub async fn review_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::HrStaff])
        .await?;

    let document = DocumentService::new(&state.db)
        .review(id, payload.status, payload.notes, &user)
        .await?;

    Ok(Json(document.into_dto()))
}

fn into_dtos(documents: Vec<Document>) -> Vec<DocumentDto> {
    documents.into_iter().map(Document::into_dto).collect()
}
