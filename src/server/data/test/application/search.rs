use super::*;

/// Tests searching by applicant email.
///
/// Expected: Ok with the application of the matching applicant only
#[tokio::test]
async fn matches_applicant_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, job) = factory::helpers::create_published_job(db).await?;
    let wanted = factory::user::UserFactory::new(db)
        .email("grace.hopper@example.com")
        .build()
        .await?;
    let other = factory::create_user(db).await?;
    factory::create_application(db, job.id, wanted.id).await?;
    factory::create_application(db, job.id, other.id).await?;

    let repo = ApplicationRepository::new(db);
    let results = repo
        .search(ApplicationSearchParams {
            term: Some("hopper".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].applicant_id, wanted.id);

    Ok(())
}

/// Tests searching by job title.
///
/// Expected: Ok with applications against the matching job only
#[tokio::test]
async fn matches_job_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hr = factory::create_user_with_role(db, "hr_admin").await?;
    let designer = factory::job::JobFactory::new(db, hr.id)
        .title("Product Designer")
        .published()
        .build()
        .await?;
    let accountant = factory::job::JobFactory::new(db, hr.id)
        .title("Accountant")
        .published()
        .build()
        .await?;
    let applicant = factory::create_user(db).await?;
    factory::create_application(db, designer.id, applicant.id).await?;
    factory::create_application(db, accountant.id, applicant.id).await?;

    let repo = ApplicationRepository::new(db);
    let results = repo
        .search(ApplicationSearchParams {
            term: Some("designer".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].job_id, designer.id);

    Ok(())
}

/// Tests the inclusive submission date range.
///
/// Expected: Ok with only applications submitted inside the range
#[tokio::test]
async fn applies_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, job) = factory::helpers::create_published_job(db).await?;
    let old = factory::create_user(db).await?;
    let recent = factory::create_user(db).await?;
    factory::job_application::ApplicationFactory::new(db, job.id, old.id)
        .submitted_at(Utc::now() - Duration::days(30))
        .build()
        .await?;
    factory::create_application(db, job.id, recent.id).await?;

    let repo = ApplicationRepository::new(db);
    let results = repo
        .search(ApplicationSearchParams {
            submitted: DateRange::from_dates(
                Some((Utc::now() - Duration::days(7)).date_naive()),
                Some(Utc::now().date_naive()),
            )
            .unwrap(),
            ..Default::default()
        })
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].applicant_id, recent.id);

    Ok(())
}
