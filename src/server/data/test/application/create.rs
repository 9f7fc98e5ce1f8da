use super::*;

/// Tests creating an application.
///
/// Expected: Ok with status submitted and no review or withdrawal stamps
#[tokio::test]
async fn creates_submitted_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, job) = factory::helpers::create_published_job(db).await?;
    let applicant = factory::create_user(db).await?;

    let repo = ApplicationRepository::new(db);
    let application = repo
        .create(CreateApplicationParams {
            job_id: job.id,
            applicant_id: applicant.id,
            cover_letter: Some("Hello".to_string()),
            resume: None,
        })
        .await?;

    assert_eq!(application.status, ApplicationStatus::Submitted);
    assert_eq!(application.cover_letter.as_deref(), Some("Hello"));
    assert!(application.reviewed_at.is_none());
    assert!(application.withdrawn_at.is_none());
    assert!(repo.exists_for(job.id, applicant.id).await?);

    Ok(())
}

/// Tests the unique index on (job, applicant).
///
/// Expected: Err on the second insert for the same pair
#[tokio::test]
async fn unique_index_rejects_second_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, applicant, job, _application) =
        factory::helpers::create_application_with_dependencies(db).await?;

    let repo = ApplicationRepository::new(db);
    let result = repo
        .create(CreateApplicationParams {
            job_id: job.id,
            applicant_id: applicant.id,
            cover_letter: None,
            resume: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
