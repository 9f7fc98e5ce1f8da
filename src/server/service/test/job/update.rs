use super::*;

/// Tests that a published job cannot have a required field blanked.
///
/// Expected: Err(BadRequest) and the stored title unchanged
#[tokio::test]
async fn rejects_blank_required_field() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, job) = factory::helpers::create_published_job(db).await?;
    let service = JobService::new(db);

    let result = service
        .update(
            job.id,
            UpdateJobParams {
                title: Some("   ".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get(job.id).await?.title, job.title);

    Ok(())
}

/// Tests a partial update that leaves omitted fields alone.
///
/// Expected: Ok with the new location and the original title
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, job) = factory::helpers::create_published_job(db).await?;

    let updated = JobService::new(db)
        .update(
            job.id,
            UpdateJobParams {
                location: Some("Porto".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.location, "Porto");
    assert_eq!(updated.title, job.title);
    assert_eq!(updated.status, JobStatus::Published);

    Ok(())
}

/// Tests updating a job that doesn't exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_job() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = JobService::new(db).update(4040, UpdateJobParams::default()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
