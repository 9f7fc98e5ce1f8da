use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

string_enum! {
    pub enum DocumentType {
        Resume => "resume",
        CoverLetter => "cover_letter",
        Portfolio => "portfolio",
        Certificate => "certificate",
        IdDocument => "id_document",
        Other => "other",
    }
}

string_enum! {
    pub enum DocumentStatus {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
        RequiresUpdate => "requires_update",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDto {
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

/// Metadata for a file already placed in storage by the client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadDocumentDto {
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub url: String,
    pub doc_type: Option<DocumentType>,
    pub description: Option<String>,
    pub job_application_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewDocumentDto {
    pub status: DocumentStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFilterQuery {
    pub status: Option<DocumentStatus>,
    #[serde(rename = "type")]
    pub doc_type: Option<DocumentType>,
    pub uploaded_by: Option<i32>,
}
