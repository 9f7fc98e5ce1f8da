use super::*;

/// Tests per-status counts over a date range.
///
/// Expected: Ok with only in-range applications counted
#[tokio::test]
async fn counts_within_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, job) = factory::helpers::create_published_job(db).await?;
    let old = factory::create_user(db).await?;
    let recent = factory::create_user(db).await?;
    factory::job_application::ApplicationFactory::new(db, job.id, old.id)
        .status("rejected")
        .submitted_at(Utc::now() - Duration::days(60))
        .build()
        .await?;
    factory::create_application(db, job.id, recent.id).await?;

    let repo = ReportRepository::new(db);
    let week_ago = (Utc::now() - Duration::days(7)).date_naive();
    let range = DateRange::from_dates(Some(week_ago), None).unwrap();
    let counts = repo.application_status_counts(range).await?;

    let count_of = |status| counts.iter().find(|(s, _)| *s == status).unwrap().1;
    assert_eq!(count_of(ApplicationStatus::Submitted), 1);
    assert_eq!(count_of(ApplicationStatus::Rejected), 0);

    Ok(())
}
