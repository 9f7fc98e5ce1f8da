use super::*;

/// Tests the draft to published to closed lifecycle.
///
/// Publishing stamps `published_at`; closing stamps `closed_at` and keeps the original
/// publish time.
///
/// Expected: Ok with both timestamps set after close
#[tokio::test]
async fn publish_then_close_keeps_published_at() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hr = factory::create_user_with_role(db, "hr_manager").await?;
    let draft = factory::create_job(db, hr.id).await?;
    let service = JobService::new(db);

    let published = service.publish(draft.id).await?;
    assert_eq!(published.status, JobStatus::Published);
    let published_at = published.published_at.unwrap();

    let closed = service.close(draft.id).await?;
    assert_eq!(closed.status, JobStatus::Closed);
    assert_eq!(closed.published_at, Some(published_at));
    assert!(closed.closed_at.is_some());

    Ok(())
}

/// Tests that a disallowed step is refused without touching the row.
///
/// Expected: Err(TransitionErr) and the job still in draft
#[tokio::test]
async fn rejects_archiving_a_draft() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hr = factory::create_user_with_role(db, "hr_manager").await?;
    let draft = factory::create_job(db, hr.id).await?;
    let service = JobService::new(db);

    let result = service.archive(draft.id).await;

    assert!(matches!(result, Err(AppError::TransitionErr(_))));
    assert_eq!(service.get(draft.id).await?.status, JobStatus::Draft);

    Ok(())
}

/// Tests that publishing refuses a posting with a blank description.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn publish_requires_complete_posting() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hr = factory::create_user_with_role(db, "hr_manager").await?;
    let draft = factory::job::JobFactory::new(db, hr.id)
        .description("")
        .build()
        .await?;

    let result = JobService::new(db).publish(draft.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests reopening a closed job.
///
/// Expected: Ok with status published and `closed_at` cleared
#[tokio::test]
async fn republishing_clears_closed_at() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hr = factory::create_user_with_role(db, "hr_manager").await?;
    let closed = factory::job::JobFactory::new(db, hr.id)
        .closed()
        .build()
        .await?;

    let reopened = JobService::new(db).publish(closed.id).await?;

    assert_eq!(reopened.status, JobStatus::Published);
    assert!(reopened.published_at.is_some());
    assert!(reopened.closed_at.is_none());

    Ok(())
}

/// Tests statistics over a mix of job states.
///
/// Expected: Ok with per-status counts summing to the total
#[tokio::test]
async fn statistics_count_each_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hr = factory::create_user_with_role(db, "hr_manager").await?;
    factory::create_job(db, hr.id).await?;
    factory::job::JobFactory::new(db, hr.id).published().build().await?;
    factory::job::JobFactory::new(db, hr.id).closed().build().await?;

    let stats = JobService::new(db).statistics().await?;

    assert_eq!(stats.total, 3);
    assert_eq!(stats.draft, 1);
    assert_eq!(stats.published, 1);
    assert_eq!(stats.closed, 1);

    Ok(())
}
