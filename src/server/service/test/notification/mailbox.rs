use super::*;

/// Tests that mark-all-read only touches the caller's mailbox.
///
/// Expected: Ok(2) for the first user while the second user's notification stays unread
#[tokio::test]
async fn mark_all_read_is_scoped_to_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    factory::create_notification(db, alice.id).await?;
    factory::create_notification(db, alice.id).await?;
    factory::create_notification(db, bob.id).await?;
    let service = NotificationService::new(db);

    let touched = service.mark_all_read(alice.id).await?;

    assert_eq!(touched, 2);
    assert_eq!(service.unread_count(alice.id).await?, 0);
    assert_eq!(service.unread_count(bob.id).await?, 1);

    Ok(())
}

/// Tests acting on another user's notification.
///
/// Expected: Err(NotFound) for both mark-read and delete
#[tokio::test]
async fn foreign_notification_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let notification = factory::create_notification(db, owner.id).await?;
    let service = NotificationService::new(db);

    assert!(matches!(
        service.mark_read(notification.id, other.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(notification.id, other.id).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(service.unread_count(owner.id).await?, 1);

    Ok(())
}

/// Tests paging metadata on the mailbox listing.
///
/// Expected: Ok with page 3 holding the last notification and three pages in total
#[tokio::test]
async fn list_reports_total_pages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for _ in 0..5 {
        factory::create_notification(db, user.id).await?;
    }

    let page = NotificationService::new(db)
        .list(
            user.id,
            NotificationListParams {
                page: 3,
                limit: 2,
                unread_only: false,
            },
        )
        .await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.page, 3);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.notifications.len(), 1);

    Ok(())
}

/// Tests creating a notification with a blank title.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn create_requires_title() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = NotificationService::new(db)
        .create(CreateNotificationParams {
            user_id: user.id,
            title: " ".to_string(),
            message: "Office closed on Friday".to_string(),
            notification_type: NotificationType::SystemAnnouncement,
            priority: NotificationPriority::Low,
            action_url: None,
            triggered_by_id: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
