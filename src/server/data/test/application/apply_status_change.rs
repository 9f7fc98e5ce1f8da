use super::*;

/// Tests writing a review through an open transaction.
///
/// Runs the repository against a `DatabaseTransaction` and commits, verifying that the
/// reviewer stamp is persisted.
///
/// Expected: Ok with status reviewed and reviewer fields set after commit
#[tokio::test]
async fn writes_change_inside_transaction() -> Result<(), DbErr> {
    use sea_orm::TransactionTrait;

    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, _applicant, _job, application) =
        factory::helpers::create_application_with_dependencies(db).await?;

    let txn = db.begin().await?;
    let current = ApplicationRepository::new(&txn)
        .find_by_id(application.id)
        .await?
        .unwrap();
    let change = current.status_change(ApplicationStatus::Reviewed, None, hr.id, Utc::now());
    ApplicationRepository::new(&txn)
        .apply_status_change(application.id, change)
        .await?;
    txn.commit().await?;

    let stored = ApplicationRepository::new(db)
        .find_by_id(application.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, ApplicationStatus::Reviewed);
    assert_eq!(stored.reviewed_by_id, Some(hr.id));
    assert!(stored.reviewed_at.is_some());

    Ok(())
}

/// Tests that a rolled-back transaction leaves the row untouched.
///
/// Expected: Ok with status still submitted
#[tokio::test]
async fn rollback_discards_change() -> Result<(), DbErr> {
    use sea_orm::TransactionTrait;

    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, _applicant, _job, application) =
        factory::helpers::create_application_with_dependencies(db).await?;

    let txn = db.begin().await?;
    let current = ApplicationRepository::new(&txn)
        .find_by_id(application.id)
        .await?
        .unwrap();
    let change = current.status_change(ApplicationStatus::Rejected, None, hr.id, Utc::now());
    ApplicationRepository::new(&txn)
        .apply_status_change(application.id, change)
        .await?;
    txn.rollback().await?;

    let stored = ApplicationRepository::new(db)
        .find_by_id(application.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, ApplicationStatus::Submitted);

    Ok(())
}
