use super::*;

/// Tests a partial update.
///
/// Verifies that provided fields change, absent fields are kept and status is untouched.
///
/// Expected: Ok with title changed and department, status unchanged
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, job) = factory::helpers::create_published_job(db).await?;

    let repo = JobRepository::new(db);
    let updated = repo
        .update(
            job.id,
            UpdateJobParams {
                title: Some("Staff Engineer".to_string()),
                salary_max: Some(120_000),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Staff Engineer");
    assert_eq!(updated.salary_max, Some(120_000));
    assert_eq!(updated.department, job.department);
    assert_eq!(updated.status, JobStatus::Published);

    Ok(())
}

/// Tests updating a job that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_job() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = JobRepository::new(db);
    let result = repo.update(999, UpdateJobParams::default()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
