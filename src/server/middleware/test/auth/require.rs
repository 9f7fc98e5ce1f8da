use super::*;

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_signature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let foreign = TokenService::new("someone-else", chrono::Duration::minutes(15));
    let headers = bearer_for(&foreign, user);

    let result = AuthGuard::new(db, &tokens(), &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user has since been removed.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::create_user(db).await?;
    let user_id = user.id;
    let headers = bearer_for(&tokens, user);
    entity::prelude::User::delete_by_id(user_id).exec(db).await?;

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(id))) if id == user_id
    ));

    Ok(())
}

/// Tests permission checks against the user's role.
///
/// A recruiter is HR staff but not HR management.
///
/// Expected: Ok for HrStaff, Err(AuthError::AccessDenied) for HrManagement
#[tokio::test]
async fn checks_role_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let recruiter = factory::create_user_with_role(db, "recruiter").await?;
    let recruiter_id = recruiter.id;
    let headers = bearer_for(&tokens, recruiter);
    let guard = AuthGuard::new(db, &tokens, &headers);

    let user = guard.require(&[Permission::HrStaff]).await?;
    assert_eq!(user.id, recruiter_id);

    let result = guard
        .require(&[Permission::HrStaff, Permission::HrManagement])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == recruiter_id
    ));

    Ok(())
}

/// Tests that interviewers may schedule but are not HR staff.
///
/// Expected: Ok for ScheduleInterviews, Err(AuthError::AccessDenied) for HrStaff
#[tokio::test]
async fn interviewer_can_schedule_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let interviewer = factory::create_user_with_role(db, "interviewer").await?;
    let headers = bearer_for(&tokens, interviewer);
    let guard = AuthGuard::new(db, &tokens, &headers);

    assert!(guard.require(&[Permission::ScheduleInterviews]).await.is_ok());
    assert!(matches!(
        guard.require(&[Permission::HrStaff]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
