use super::*;

/// Tests who may view a document.
///
/// Expected: Ok for the uploader and HR staff, Err(AccessDenied) for another applicant
#[tokio::test]
async fn get_allows_uploader_and_hr() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let recruiter = factory::create_user_with_role(db, "recruiter").await?;
    let document = factory::create_document(db, uploader.id).await?;
    let service = DocumentService::new(db);

    assert!(service.get(document.id, &as_user(uploader)).await.is_ok());
    assert!(service.get(document.id, &as_user(recruiter)).await.is_ok());
    assert!(matches!(
        service.get(document.id, &as_user(other)).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that recruiters may view but not delete someone else's document.
///
/// Expected: Err(AccessDenied) for the recruiter, Ok for an HR manager
#[tokio::test]
async fn delete_requires_uploader_or_hr_management() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_user(db).await?;
    let recruiter = factory::create_user_with_role(db, "recruiter").await?;
    let manager = factory::create_user_with_role(db, "hr_manager").await?;
    let document = factory::create_document(db, uploader.id).await?;
    let service = DocumentService::new(db);

    assert!(matches!(
        service.delete(document.id, &as_user(recruiter)).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    service.delete(document.id, &as_user(manager)).await?;
    assert!(matches!(
        service.delete(document.id, &as_user(uploader)).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
