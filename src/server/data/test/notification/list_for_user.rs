use super::*;

/// Tests paging and the unread filter.
///
/// Expected: Ok with the page size respected and totals matching the filter
#[tokio::test]
async fn pages_and_filters_unread() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    for _ in 0..3 {
        factory::create_notification(db, user.id).await?;
    }
    factory::notification::NotificationFactory::new(db, user.id)
        .read(true)
        .build()
        .await?;
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let (page, total) = repo
        .list_for_user(
            user.id,
            NotificationListParams {
                page: 1,
                limit: 2,
                unread_only: false,
            },
        )
        .await?;
    assert_eq!(page.len(), 2);
    assert_eq!(total, 4);

    let (unread, unread_total) = repo
        .list_for_user(
            user.id,
            NotificationListParams {
                page: 1,
                limit: 20,
                unread_only: true,
            },
        )
        .await?;
    assert_eq!(unread.len(), 3);
    assert_eq!(unread_total, 3);
    assert_eq!(repo.count_unread(user.id).await?, 3);

    Ok(())
}
