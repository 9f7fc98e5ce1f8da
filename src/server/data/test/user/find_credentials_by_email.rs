use super::*;

/// Tests loading credentials for an existing account.
///
/// Expected: Ok(Some) carrying the stored password hash
#[tokio::test]
async fn returns_stored_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("hr@example.com")
        .password_hash("stored-hash")
        .role("hr_admin")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_email("hr@example.com").await?.unwrap();

    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.user.role, Role::HrAdmin);
    assert_eq!(credentials.password_hash, "stored-hash");

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_email("nobody@example.com").await?;

    assert!(credentials.is_none());

    Ok(())
}
