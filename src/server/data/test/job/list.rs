use super::*;

/// Tests listing jobs without filters.
///
/// Expected: Ok with every job, newest first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hr = factory::create_user_with_role(db, "hr_admin").await?;
    let older = factory::job::JobFactory::new(db, hr.id)
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let newer = factory::create_job(db, hr.id).await?;

    let repo = JobRepository::new(db);
    let jobs = repo.list(JobFilters::default()).await?;

    let ids: Vec<i32> = jobs.iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests combining status and location filters.
///
/// Verifies that location is matched as a case-insensitive substring and that every
/// filter must match.
///
/// Expected: Ok with only the published job in a matching location
#[tokio::test]
async fn applies_all_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hr = factory::create_user_with_role(db, "hr_admin").await?;
    let matching = factory::job::JobFactory::new(db, hr.id)
        .location("Remote (EU)")
        .published()
        .build()
        .await?;
    factory::job::JobFactory::new(db, hr.id)
        .location("Remote (EU)")
        .build()
        .await?;
    factory::job::JobFactory::new(db, hr.id)
        .location("London")
        .published()
        .build()
        .await?;

    let repo = JobRepository::new(db);
    let jobs = repo
        .list(JobFilters {
            status: Some(JobStatus::Published),
            location: Some("remote".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, matching.id);

    Ok(())
}

/// Tests filtering by department.
///
/// Expected: Ok with only jobs in the requested department
#[tokio::test]
async fn filters_by_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hr = factory::create_user_with_role(db, "hr_admin").await?;
    factory::job::JobFactory::new(db, hr.id)
        .department("Sales")
        .build()
        .await?;
    factory::job::JobFactory::new(db, hr.id)
        .department("Finance")
        .build()
        .await?;

    let repo = JobRepository::new(db);
    let jobs = repo
        .list(JobFilters {
            department: Some("Sales".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].department, "Sales");

    Ok(())
}
