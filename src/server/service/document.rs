//! Document upload and review logic.

use sea_orm::DatabaseConnection;

use crate::{
    model::document::DocumentStatus,
    server::{
        data::{application::ApplicationRepository, document::DocumentRepository},
        error::{auth::AuthError, AppError},
        model::{
            document::{Document, DocumentFilters, ReviewDocumentParams, UploadDocumentParams},
            lifecycle::StatusLifecycle,
            user::User,
        },
        service::notification::NotificationService,
    },
};

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records uploaded document metadata in `pending` status.
    ///
    /// # Returns
    /// - `Ok(Document)` - The stored document
    /// - `Err(AppError::BadRequest)` - Filename or URL is blank, or size is negative
    /// - `Err(AppError::NotFound)` - Referenced application doesn't exist
    pub async fn upload(&self, params: UploadDocumentParams) -> Result<Document, AppError> {
        if params.filename.trim().is_empty() || params.url.trim().is_empty() {
            return Err(AppError::BadRequest(
                "filename and url are required".to_string(),
            ));
        }
        if params.size < 0 {
            return Err(AppError::BadRequest("size must not be negative".to_string()));
        }

        if let Some(application_id) = params.job_application_id {
            if ApplicationRepository::new(self.db)
                .find_by_id(application_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Application not found".to_string()));
            }
        }

        let document = DocumentRepository::new(self.db).create(params).await?;
        tracing::info!(
            "Document {} uploaded by user {}",
            document.id,
            document.uploaded_by_id
        );
        Ok(document)
    }

    /// Records a review outcome and notifies the uploader.
    ///
    /// # Returns
    /// - `Ok(Document)` - The reviewed document
    /// - `Err(AuthError::AccessDenied)` - Reviewer lacks an HR role
    /// - `Err(AppError::BadRequest)` - Target status is `pending`
    /// - `Err(AppError::NotFound)` - No document with that ID
    /// - `Err(AppError::TransitionErr)` - Document was already finally reviewed
    pub async fn review(
        &self,
        id: i32,
        status: DocumentStatus,
        notes: Option<String>,
        reviewer: &User,
    ) -> Result<Document, AppError> {
        if !reviewer.role.is_hr_staff() {
            return Err(AuthError::AccessDenied(
                reviewer.id,
                "Only HR staff can review documents".to_string(),
            )
            .into());
        }
        if status == DocumentStatus::Pending {
            return Err(AppError::BadRequest(
                "Review status must be approved, rejected or requires_update".to_string(),
            ));
        }

        let repo = DocumentRepository::new(self.db);
        let document = self.find(id).await?;
        document.status.ensure_transition(status)?;

        let reviewed = repo
            .review(
                id,
                ReviewDocumentParams {
                    status,
                    notes,
                    reviewer_id: reviewer.id,
                },
            )
            .await?;

        tracing::info!(
            "Document {} reviewed as {} by user {}",
            id,
            reviewed.status,
            reviewer.id
        );

        NotificationService::new(self.db)
            .document_reviewed(&reviewed)
            .await?;

        Ok(reviewed)
    }

    /// Fetches a document visible to `actor`: its uploader or HR staff.
    pub async fn get(&self, id: i32, actor: &User) -> Result<Document, AppError> {
        let document = self.find(id).await?;

        if document.uploaded_by_id != actor.id && !actor.role.is_hr_staff() {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("User is not allowed to view document {}", id),
            )
            .into());
        }

        Ok(document)
    }

    /// Deletes a document on behalf of its uploader or HR management.
    pub async fn delete(&self, id: i32, actor: &User) -> Result<(), AppError> {
        let document = self.find(id).await?;

        if document.uploaded_by_id != actor.id && !actor.role.is_hr_management() {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("User is not allowed to delete document {}", id),
            )
            .into());
        }

        if !DocumentRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Document not found".to_string()));
        }

        tracing::info!("Document {} deleted by user {}", id, actor.id);
        Ok(())
    }

    pub async fn list_mine(&self, user_id: i32) -> Result<Vec<Document>, AppError> {
        Ok(DocumentRepository::new(self.db)
            .list_by_uploader(user_id)
            .await?)
    }

    pub async fn list_all(&self, filters: DocumentFilters) -> Result<Vec<Document>, AppError> {
        Ok(DocumentRepository::new(self.db).list(filters).await?)
    }

    pub async fn list_for_application(&self, application_id: i32) -> Result<Vec<Document>, AppError> {
        Ok(DocumentRepository::new(self.db)
            .list_for_application(application_id)
            .await?)
    }

    async fn find(&self, id: i32) -> Result<Document, AppError> {
        DocumentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Document not found".to_string()))
    }
}
