use super::*;

/// Tests moving an application to reviewed.
///
/// Entering reviewed stamps the reviewer and notifies the applicant.
///
/// Expected: Ok with reviewer fields set and one notification for the applicant
#[tokio::test]
async fn reviewed_stamps_reviewer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, applicant, _job, application) =
        factory::helpers::create_application_with_dependencies(db).await?;

    let updated = ApplicationService::new(db)
        .update_status(
            application.id,
            ApplicationStatus::Reviewed,
            Some("Strong CV".to_string()),
            &as_user(hr.clone()),
        )
        .await?;

    assert_eq!(updated.status, ApplicationStatus::Reviewed);
    assert_eq!(updated.reviewed_by_id, Some(hr.id));
    assert!(updated.reviewed_at.is_some());
    assert_eq!(updated.notes.as_deref(), Some("Strong CV"));

    let (notifications, _) = NotificationRepository::new(db)
        .list_for_user(applicant.id, NotificationListParams { page: 1, limit: 20, unread_only: false })
        .await?;
    assert_eq!(notifications.len(), 1);

    Ok(())
}

/// Tests that HR staff cannot set withdrawn on an applicant's behalf.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn refuses_withdrawn_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, _applicant, _job, application) =
        factory::helpers::create_application_with_dependencies(db).await?;

    let result = ApplicationService::new(db)
        .update_status(application.id, ApplicationStatus::Withdrawn, None, &as_user(hr))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests skipping straight from submitted to hired.
///
/// Expected: Err(TransitionErr)
#[tokio::test]
async fn refuses_skipping_steps() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, _applicant, _job, application) =
        factory::helpers::create_application_with_dependencies(db).await?;

    let result = ApplicationService::new(db)
        .update_status(application.id, ApplicationStatus::Hired, None, &as_user(hr))
        .await;

    assert!(matches!(result, Err(AppError::TransitionErr(_))));

    Ok(())
}
