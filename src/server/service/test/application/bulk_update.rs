use super::*;

/// Tests shortlisting several applications at once.
///
/// Expected: Ok(2) with both applications shortlisted
#[tokio::test]
async fn updates_every_listed_application() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, job) = factory::helpers::create_published_job(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let a = factory::create_application(db, job.id, first.id).await?;
    let b = factory::create_application(db, job.id, second.id).await?;

    let updated = ApplicationService::new(db)
        .bulk_update(BulkUpdateParams {
            application_ids: vec![a.id, b.id],
            status: Some(ApplicationStatus::Shortlisted),
            notes: None,
            actor_id: hr.id,
        })
        .await?;

    assert_eq!(updated, 2);
    let stored = ApplicationRepository::new(db).find_many(&[a.id, b.id]).await?;
    assert!(stored
        .iter()
        .all(|application| application.status == ApplicationStatus::Shortlisted));

    Ok(())
}

/// Tests that one disallowed move aborts the whole batch.
///
/// The second application is already rejected, so shortlisting it is not allowed and the
/// first application must stay submitted.
///
/// Expected: Err(TransitionErr) with no application changed
#[tokio::test]
async fn one_invalid_row_changes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, job) = factory::helpers::create_published_job(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let open = factory::create_application(db, job.id, first.id).await?;
    let rejected = factory::job_application::ApplicationFactory::new(db, job.id, second.id)
        .status("rejected")
        .build()
        .await?;

    let result = ApplicationService::new(db)
        .bulk_update(BulkUpdateParams {
            application_ids: vec![open.id, rejected.id],
            status: Some(ApplicationStatus::Shortlisted),
            notes: Some("Batch".to_string()),
            actor_id: hr.id,
        })
        .await;

    assert!(matches!(result, Err(AppError::TransitionErr(_))));

    let stored = ApplicationRepository::new(db)
        .find_by_id(open.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, ApplicationStatus::Submitted);
    assert_eq!(stored.notes, None);

    Ok(())
}

/// Tests a batch naming an application that doesn't exist.
///
/// Expected: Err(NotFound) with the existing application unchanged
#[tokio::test]
async fn missing_id_changes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, _applicant, _job, application) =
        factory::helpers::create_application_with_dependencies(db).await?;

    let result = ApplicationService::new(db)
        .bulk_update(BulkUpdateParams {
            application_ids: vec![application.id, application.id + 100],
            status: Some(ApplicationStatus::Rejected),
            notes: None,
            actor_id: hr.id,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    let stored = ApplicationRepository::new(db)
        .find_by_id(application.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, ApplicationStatus::Submitted);

    Ok(())
}

/// Tests an empty batch.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_batch() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hr = factory::create_user_with_role(db, "hr_admin").await?;

    let result = ApplicationService::new(db)
        .bulk_update(BulkUpdateParams {
            application_ids: Vec::new(),
            status: Some(ApplicationStatus::Rejected),
            notes: None,
            actor_id: hr.id,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
