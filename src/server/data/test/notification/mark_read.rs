use super::*;

/// Tests marking one's own notification as read.
///
/// Expected: Ok(true) and the unread count drops
#[tokio::test]
async fn marks_own_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let notification = factory::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    assert!(repo.mark_read(notification.id, user.id).await?);
    assert_eq!(repo.count_unread(user.id).await?, 0);

    Ok(())
}

/// Tests marking another user's notification.
///
/// Expected: Ok(false) and the owner's notification stays unread
#[tokio::test]
async fn ignores_other_users_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let notification = factory::create_notification(db, owner.id).await?;

    let repo = NotificationRepository::new(db);
    assert!(!repo.mark_read(notification.id, intruder.id).await?);
    assert_eq!(repo.count_unread(owner.id).await?, 1);

    Ok(())
}
