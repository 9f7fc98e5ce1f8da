use super::*;

/// Tests recording an upload.
///
/// Expected: Ok with status pending and no reviewer fields
#[tokio::test]
async fn creates_pending_document() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = DocumentRepository::new(db);
    let document = repo
        .create(UploadDocumentParams {
            filename: "cv-123.pdf".to_string(),
            original_name: "cv.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size: 2048,
            url: "/uploads/cv-123.pdf".to_string(),
            doc_type: DocumentType::Resume,
            description: None,
            job_application_id: None,
            uploaded_by_id: user.id,
        })
        .await?;

    assert_eq!(document.status, DocumentStatus::Pending);
    assert_eq!(document.doc_type, DocumentType::Resume);
    assert!(document.reviewed_by_id.is_none());
    assert!(document.reviewed_at.is_none());

    Ok(())
}
