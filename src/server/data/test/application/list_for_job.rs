use super::*;

/// Tests paging through a job's applications.
///
/// Verifies that the total counts every matching row regardless of limit and offset.
///
/// Expected: Ok with one row returned and a total of three
#[tokio::test]
async fn pages_with_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, job) = factory::helpers::create_published_job(db).await?;
    for _ in 0..3 {
        let applicant = factory::create_user(db).await?;
        factory::create_application(db, job.id, applicant.id).await?;
    }

    let repo = ApplicationRepository::new(db);
    let (applications, total) = repo.list_for_job(job.id, None, Some(1), Some(1)).await?;

    assert_eq!(applications.len(), 1);
    assert_eq!(total, 3);

    Ok(())
}

/// Tests the status filter on a job's applications.
///
/// Expected: Ok with only shortlisted applications counted and returned
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, job) = factory::helpers::create_published_job(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::job_application::ApplicationFactory::new(db, job.id, first.id)
        .status("shortlisted")
        .build()
        .await?;
    factory::create_application(db, job.id, second.id).await?;

    let repo = ApplicationRepository::new(db);
    let (applications, total) = repo
        .list_for_job(job.id, Some(ApplicationStatus::Shortlisted), None, None)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(applications[0].applicant_id, first.id);

    Ok(())
}
