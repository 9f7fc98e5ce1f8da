use super::*;

/// Tests that only the applicant may withdraw an application.
///
/// Expected: Err(AccessDenied) for another user, then Ok with `withdrawn_at` set
#[tokio::test]
async fn only_applicant_can_withdraw() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, applicant, _job, application) =
        factory::helpers::create_application_with_dependencies(db).await?;
    let service = ApplicationService::new(db);

    let result = service.withdraw(application.id, &as_user(hr)).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let withdrawn = service.withdraw(application.id, &as_user(applicant)).await?;
    assert_eq!(withdrawn.status, ApplicationStatus::Withdrawn);
    assert!(withdrawn.withdrawn_at.is_some());

    Ok(())
}

/// Tests withdrawing an application that was already rejected.
///
/// Expected: Err(TransitionErr)
#[tokio::test]
async fn terminal_application_cannot_be_withdrawn() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, job) = factory::helpers::create_published_job(db).await?;
    let applicant = factory::create_user(db).await?;
    let application = factory::job_application::ApplicationFactory::new(db, job.id, applicant.id)
        .status("rejected")
        .build()
        .await?;

    let result = ApplicationService::new(db)
        .withdraw(application.id, &as_user(applicant))
        .await;

    assert!(matches!(result, Err(AppError::TransitionErr(_))));

    Ok(())
}
