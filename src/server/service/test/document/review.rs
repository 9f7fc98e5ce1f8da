use super::*;

/// Tests an HR review of a pending document.
///
/// Expected: Ok with reviewer fields set and the uploader notified
#[tokio::test]
async fn review_records_reviewer_and_notifies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_user(db).await?;
    let recruiter = factory::create_user_with_role(db, "recruiter").await?;
    let document = factory::create_document(db, uploader.id).await?;

    let reviewed = DocumentService::new(db)
        .review(
            document.id,
            DocumentStatus::RequiresUpdate,
            Some("Please add a signature".to_string()),
            &as_user(recruiter.clone()),
        )
        .await?;

    assert_eq!(reviewed.status, DocumentStatus::RequiresUpdate);
    assert_eq!(reviewed.reviewed_by_id, Some(recruiter.id));
    assert!(reviewed.reviewed_at.is_some());
    assert_eq!(
        NotificationRepository::new(db).count_unread(uploader.id).await?,
        1
    );

    Ok(())
}

/// Tests a review attempt by a non-HR user.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn applicant_cannot_review() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_user(db).await?;
    let document = factory::create_document(db, uploader.id).await?;

    let result = DocumentService::new(db)
        .review(document.id, DocumentStatus::Approved, None, &as_user(uploader))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests re-reviewing a document that was already approved.
///
/// Expected: Err(TransitionErr)
#[tokio::test]
async fn approved_document_is_final() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_user(db).await?;
    let hr = factory::create_user_with_role(db, "hr_admin").await?;
    let document = factory::document::DocumentFactory::new(db, uploader.id)
        .status("approved")
        .build()
        .await?;

    let result = DocumentService::new(db)
        .review(document.id, DocumentStatus::Rejected, None, &as_user(hr))
        .await;

    assert!(matches!(result, Err(AppError::TransitionErr(_))));

    Ok(())
}
