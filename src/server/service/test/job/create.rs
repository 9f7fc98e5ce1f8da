use super::*;

/// Tests HR staff creating a job.
///
/// Expected: Ok with a draft job and no publish timestamp
#[tokio::test]
async fn creates_draft_for_hr_staff() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let recruiter = factory::create_user_with_role(db, "recruiter").await?;

    let job = JobService::new(db).create(create_params(recruiter.id)).await?;

    assert_eq!(job.status, JobStatus::Draft);
    assert_eq!(job.created_by_id, recruiter.id);
    assert!(job.published_at.is_none());

    Ok(())
}

/// Tests that applicants cannot create jobs.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn rejects_non_hr_creator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let applicant = factory::create_user(db).await?;

    let result = JobService::new(db).create(create_params(applicant.id)).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == applicant.id
    ));

    Ok(())
}

/// Tests creating a job for a creator that doesn't exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_creator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = JobService::new(db).create(create_params(4242)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that blank required fields are refused before insert.
///
/// Expected: Err(BadRequest) naming the blank field
#[tokio::test]
async fn rejects_blank_required_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hr = factory::create_user_with_role(db, "hr_admin").await?;
    let mut params = create_params(hr.id);
    params.location = "   ".to_string();

    let result = JobService::new(db).create(params).await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg.contains("location")));

    Ok(())
}

/// Tests that search requires a non-blank term.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn search_rejects_blank_term() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = JobService::new(db).search("  ").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
