use super::*;

/// Tests the joined application export rows.
///
/// Expected: Ok with applicant email and job title resolved for each application
#[tokio::test]
async fn joins_applicant_and_job() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hr = factory::create_user_with_role(db, "hr_admin").await?;
    let job = factory::job::JobFactory::new(db, hr.id)
        .title("Site Reliability Engineer")
        .published()
        .build()
        .await?;
    let applicant = factory::user::UserFactory::new(db)
        .email("sre@example.com")
        .build()
        .await?;
    let application = factory::create_application(db, job.id, applicant.id).await?;

    let repo = ReportRepository::new(db);
    let rows = repo.application_export_rows(DateRange::default()).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, application.id);
    assert_eq!(rows[0].applicant_email, "sre@example.com");
    assert_eq!(rows[0].job_title, "Site Reliability Engineer");
    assert_eq!(rows[0].status, "submitted");

    Ok(())
}

/// Tests that the date range excludes older applications.
///
/// Expected: Ok with only the application submitted inside the range
#[tokio::test]
async fn respects_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, job) = factory::helpers::create_published_job(db).await?;
    let old = factory::create_user(db).await?;
    let recent = factory::create_user(db).await?;
    factory::job_application::ApplicationFactory::new(db, job.id, old.id)
        .submitted_at(Utc::now() - Duration::days(60))
        .build()
        .await?;
    factory::create_application(db, job.id, recent.id).await?;

    let repo = ReportRepository::new(db);
    let week_ago = (Utc::now() - Duration::days(7)).date_naive();
    let range = DateRange::from_dates(Some(week_ago), None).unwrap();
    let rows = repo.application_export_rows(range).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(repo.application_submission_times(range).await?.len(), 1);

    Ok(())
}
