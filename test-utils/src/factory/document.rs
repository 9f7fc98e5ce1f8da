//! Document factory for creating test uploads.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test documents with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::document::DocumentFactory;
///
/// let document = DocumentFactory::new(&db, applicant.id)
///     .doc_type("resume")
///     .job_application_id(application.id)
///     .build()
///     .await?;
/// ```
pub struct DocumentFactory<'a> {
    db: &'a DatabaseConnection,
    uploaded_by_id: i32,
    filename: String,
    doc_type: String,
    status: String,
    job_application_id: Option<i32>,
}

impl<'a> DocumentFactory<'a> {
    /// Creates a new DocumentFactory with default values.
    ///
    /// Defaults:
    /// - filename: `"document-{id}.pdf"`
    /// - doc_type: `"resume"`
    /// - status: `"pending"` with no reviewer
    pub fn new(db: &'a DatabaseConnection, uploaded_by_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            uploaded_by_id,
            filename: format!("document-{}.pdf", id),
            doc_type: "resume".to_string(),
            status: "pending".to_string(),
            job_application_id: None,
        }
    }

    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = doc_type.into();
        self
    }

    /// Sets a raw status without stamping reviewer fields.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn job_application_id(mut self, job_application_id: i32) -> Self {
        self.job_application_id = Some(job_application_id);
        self
    }

    /// Builds and inserts the document entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::document::Model)` - Created document entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        let now = Utc::now();
        entity::document::ActiveModel {
            url: ActiveValue::Set(format!("/uploads/{}", self.filename)),
            original_name: ActiveValue::Set(self.filename.clone()),
            filename: ActiveValue::Set(self.filename),
            mime_type: ActiveValue::Set("application/pdf".to_string()),
            size: ActiveValue::Set(1024),
            doc_type: ActiveValue::Set(self.doc_type),
            status: ActiveValue::Set(self.status),
            description: ActiveValue::Set(None),
            review_notes: ActiveValue::Set(None),
            uploaded_by_id: ActiveValue::Set(self.uploaded_by_id),
            job_application_id: ActiveValue::Set(self.job_application_id),
            reviewed_by_id: ActiveValue::Set(None),
            reviewed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending resume uploaded by the given user.
pub async fn create_document(
    db: &DatabaseConnection,
    uploaded_by_id: i32,
) -> Result<entity::document::Model, DbErr> {
    DocumentFactory::new(db, uploaded_by_id).build().await
}
