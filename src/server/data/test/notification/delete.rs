use super::*;

/// Tests deleting notifications with owner scoping.
///
/// Expected: Ok(false) for a non-owner, Ok(true) for the owner
#[tokio::test]
async fn deletes_only_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let notification = factory::create_notification(db, owner.id).await?;

    let repo = NotificationRepository::new(db);
    assert!(!repo.delete(notification.id, intruder.id).await?);
    assert!(repo.delete(notification.id, owner.id).await?);
    assert_eq!(repo.count_unread(owner.id).await?, 0);

    Ok(())
}
