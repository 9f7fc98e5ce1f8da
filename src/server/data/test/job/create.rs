use super::*;

/// Tests creating a job.
///
/// Verifies that new jobs always start as drafts without publish or close timestamps.
///
/// Expected: Ok with status draft and both timestamps unset
#[tokio::test]
async fn creates_draft_job() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hr = factory::create_user_with_role(db, "hr_manager").await?;

    let repo = JobRepository::new(db);
    let job = repo.create(create_params(hr.id)).await?;

    assert_eq!(job.status, JobStatus::Draft);
    assert_eq!(job.job_type, JobType::Contract);
    assert_eq!(job.created_by_id, hr.id);
    assert!(job.published_at.is_none());
    assert!(job.closed_at.is_none());

    Ok(())
}
