use super::*;

/// Tests listing a user's own uploads.
///
/// Expected: Ok with only documents uploaded by that user
#[tokio::test]
async fn lists_by_uploader() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_document(db, owner.id).await?;
    factory::create_document(db, owner.id).await?;
    factory::create_document(db, other.id).await?;

    let repo = DocumentRepository::new(db);
    let documents = repo.list_by_uploader(owner.id).await?;

    assert_eq!(documents.len(), 2);
    assert!(documents.iter().all(|d| d.uploaded_by_id == owner.id));

    Ok(())
}

/// Tests combining status and type filters.
///
/// Expected: Ok with only pending portfolios
#[tokio::test]
async fn filters_by_status_and_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::document::DocumentFactory::new(db, user.id)
        .doc_type("portfolio")
        .build()
        .await?;
    factory::document::DocumentFactory::new(db, user.id)
        .doc_type("portfolio")
        .status("approved")
        .build()
        .await?;
    factory::create_document(db, user.id).await?;

    let repo = DocumentRepository::new(db);
    let documents = repo
        .list(DocumentFilters {
            status: Some(DocumentStatus::Pending),
            doc_type: Some(DocumentType::Portfolio),
            uploaded_by: None,
        })
        .await?;

    assert_eq!(documents.len(), 1);
    assert_eq!(repo.count_by_type(DocumentType::Portfolio).await?, 2);

    Ok(())
}

/// Tests listing documents attached to an application.
///
/// Expected: Ok with only the attached document
#[tokio::test]
async fn lists_for_application() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, applicant, _job, application) =
        factory::helpers::create_application_with_dependencies(db).await?;
    let attached = factory::document::DocumentFactory::new(db, applicant.id)
        .job_application_id(application.id)
        .build()
        .await?;
    factory::create_document(db, applicant.id).await?;

    let repo = DocumentRepository::new(db);
    let documents = repo.list_for_application(application.id).await?;

    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].id, attached.id);

    Ok(())
}
