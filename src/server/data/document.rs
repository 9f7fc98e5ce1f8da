//! Document data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::document::{DocumentStatus, DocumentType},
    server::model::document::{
        Document, DocumentFilters, ReviewDocumentParams, UploadDocumentParams,
    },
};

pub struct DocumentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records uploaded file metadata in `pending` status with no reviewer.
    pub async fn create(&self, params: UploadDocumentParams) -> Result<Document, DbErr> {
        let now = Utc::now();
        let entity = entity::document::ActiveModel {
            filename: ActiveValue::Set(params.filename),
            original_name: ActiveValue::Set(params.original_name),
            mime_type: ActiveValue::Set(params.mime_type),
            size: ActiveValue::Set(params.size),
            url: ActiveValue::Set(params.url),
            doc_type: ActiveValue::Set(params.doc_type.as_str().to_string()),
            status: ActiveValue::Set(DocumentStatus::Pending.as_str().to_string()),
            description: ActiveValue::Set(params.description),
            review_notes: ActiveValue::Set(None),
            uploaded_by_id: ActiveValue::Set(params.uploaded_by_id),
            job_application_id: ActiveValue::Set(params.job_application_id),
            reviewed_by_id: ActiveValue::Set(None),
            reviewed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Document::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Document>, DbErr> {
        entity::prelude::Document::find_by_id(id)
            .one(self.db)
            .await?
            .map(Document::from_entity)
            .transpose()
    }

    /// Lists documents uploaded by a user, newest first.
    pub async fn list_by_uploader(&self, user_id: i32) -> Result<Vec<Document>, DbErr> {
        self.list(DocumentFilters {
            uploaded_by: Some(user_id),
            ..Default::default()
        })
        .await
    }

    /// Lists documents matching every present filter, newest first.
    pub async fn list(&self, filters: DocumentFilters) -> Result<Vec<Document>, DbErr> {
        let mut query = entity::prelude::Document::find();
        if let Some(status) = filters.status {
            query = query.filter(entity::document::Column::Status.eq(status.as_str()));
        }
        if let Some(doc_type) = filters.doc_type {
            query = query.filter(entity::document::Column::DocType.eq(doc_type.as_str()));
        }
        if let Some(uploaded_by) = filters.uploaded_by {
            query = query.filter(entity::document::Column::UploadedById.eq(uploaded_by));
        }

        query
            .order_by_desc(entity::document::Column::CreatedAt)
            .order_by_desc(entity::document::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Document::from_entity)
            .collect()
    }

    /// Lists documents attached to an application, newest first.
    pub async fn list_for_application(&self, application_id: i32) -> Result<Vec<Document>, DbErr> {
        entity::prelude::Document::find()
            .filter(entity::document::Column::JobApplicationId.eq(application_id))
            .order_by_desc(entity::document::Column::CreatedAt)
            .order_by_desc(entity::document::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Document::from_entity)
            .collect()
    }

    /// Stores a review decision, stamping reviewer and review time together.
    ///
    /// Callers validate the transition first.
    pub async fn review(&self, id: i32, params: ReviewDocumentParams) -> Result<Document, DbErr> {
        let now = Utc::now();
        let entity = entity::document::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            review_notes: ActiveValue::Set(params.notes),
            reviewed_by_id: ActiveValue::Set(Some(params.reviewer_id)),
            reviewed_at: ActiveValue::Set(Some(now)),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Document::from_entity(entity)
    }

    /// # Returns
    /// - `Ok(true)` - Document deleted
    /// - `Ok(false)` - No document with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Document::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Document::find().count(self.db).await
    }

    pub async fn count_by_status(&self, status: DocumentStatus) -> Result<u64, DbErr> {
        entity::prelude::Document::find()
            .filter(entity::document::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }

    pub async fn count_by_type(&self, doc_type: DocumentType) -> Result<u64, DbErr> {
        entity::prelude::Document::find()
            .filter(entity::document::Column::DocType.eq(doc_type.as_str()))
            .count(self.db)
            .await
    }
}
