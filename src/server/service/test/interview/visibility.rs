use super::*;

/// Tests who may view an interview.
///
/// Expected: Ok for HR staff, the interviewer and the applicant; Err(AccessDenied) otherwise
#[tokio::test]
async fn get_is_limited_to_participants_and_hr() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, applicant, interviewer, _application, interview) =
        factory::helpers::create_interview_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;
    let service = InterviewService::new(db);

    assert!(service.get(interview.id, &as_user(hr)).await.is_ok());
    assert!(service.get(interview.id, &as_user(interviewer)).await.is_ok());
    assert!(service.get(interview.id, &as_user(applicant)).await.is_ok());
    assert!(matches!(
        service.get(interview.id, &as_user(stranger)).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests list scoping across two applications.
///
/// Expected: Ok with the applicant seeing only their own interview and a bystander none
#[tokio::test]
async fn list_is_scoped_to_applicant() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, applicant, _interviewer, _application, interview) =
        factory::helpers::create_interview_with_dependencies(db).await?;
    factory::helpers::create_interview_with_dependencies(db).await?;
    let bystander = factory::create_user(db).await?;
    let service = InterviewService::new(db);

    let mine = service.list_for(&as_user(applicant)).await?;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, interview.id);
    assert!(service.list_for(&as_user(bystander)).await?.is_empty());

    Ok(())
}
