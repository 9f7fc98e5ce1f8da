//! Document domain models and the document review status machine.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::document::{DocumentDto, DocumentFilterQuery, DocumentStatus, DocumentType, UploadDocumentDto},
    server::model::{lifecycle::StatusLifecycle, parse_column},
};

impl StatusLifecycle for DocumentStatus {
    const ENTITY: &'static str = "document";

    fn allowed_transitions(self) -> &'static [Self] {
        use DocumentStatus::*;
        match self {
            Pending => &[Approved, Rejected, RequiresUpdate],
            RequiresUpdate => &[Approved, Rejected],
            Approved | Rejected => &[],
        }
    }

    fn label(self) -> &'static str {
        self.as_str()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: i32,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub url: String,
    pub doc_type: DocumentType,
    pub status: DocumentStatus,
    pub description: Option<String>,
    pub review_notes: Option<String>,
    pub uploaded_by_id: i32,
    pub job_application_id: Option<i32>,
    pub reviewed_by_id: Option<i32>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn from_entity(entity: entity::document::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            doc_type: parse_column(&entity.doc_type)?,
            status: parse_column(&entity.status)?,
            filename: entity.filename,
            original_name: entity.original_name,
            mime_type: entity.mime_type,
            size: entity.size,
            url: entity.url,
            description: entity.description,
            review_notes: entity.review_notes,
            uploaded_by_id: entity.uploaded_by_id,
            job_application_id: entity.job_application_id,
            reviewed_by_id: entity.reviewed_by_id,
            reviewed_at: entity.reviewed_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> DocumentDto {
        DocumentDto {
            id: self.id,
            filename: self.filename,
            original_name: self.original_name,
            mime_type: self.mime_type,
            size: self.size,
            url: self.url,
            doc_type: self.doc_type,
            status: self.status,
            description: self.description,
            review_notes: self.review_notes,
            uploaded_by_id: self.uploaded_by_id,
            job_application_id: self.job_application_id,
            reviewed_by_id: self.reviewed_by_id,
            reviewed_at: self.reviewed_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadDocumentParams {
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub url: String,
    pub doc_type: DocumentType,
    pub description: Option<String>,
    pub job_application_id: Option<i32>,
    pub uploaded_by_id: i32,
}

impl UploadDocumentParams {
    pub fn from_dto(uploaded_by_id: i32, dto: UploadDocumentDto) -> Self {
        Self {
            filename: dto.filename,
            original_name: dto.original_name,
            mime_type: dto.mime_type,
            size: dto.size,
            url: dto.url,
            doc_type: dto.doc_type.unwrap_or(DocumentType::Other),
            description: dto.description,
            job_application_id: dto.job_application_id,
            uploaded_by_id,
        }
    }
}

/// Reviewer decision on a document.
#[derive(Debug, Clone)]
pub struct ReviewDocumentParams {
    pub status: DocumentStatus,
    pub notes: Option<String>,
    pub reviewer_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct DocumentFilters {
    pub status: Option<DocumentStatus>,
    pub doc_type: Option<DocumentType>,
    pub uploaded_by: Option<i32>,
}

impl DocumentFilters {
    pub fn from_query(query: DocumentFilterQuery) -> Self {
        Self {
            status: query.status,
            doc_type: query.doc_type,
            uploaded_by: query.uploaded_by,
        }
    }
}
