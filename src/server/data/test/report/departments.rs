use super::*;

/// Tests department lookups for jobs and applications.
///
/// Expected: Ok with one entry per job and one entry per application
#[tokio::test]
async fn lists_departments_per_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hr = factory::create_user_with_role(db, "hr_admin").await?;
    let sales = factory::job::JobFactory::new(db, hr.id)
        .department("Sales")
        .published()
        .build()
        .await?;
    factory::job::JobFactory::new(db, hr.id)
        .department("Support")
        .build()
        .await?;
    for _ in 0..2 {
        let applicant = factory::create_user(db).await?;
        factory::create_application(db, sales.id, applicant.id).await?;
    }

    let repo = ReportRepository::new(db);
    let mut jobs = repo.job_departments().await?;
    jobs.sort();
    let applications = repo.application_departments().await?;

    assert_eq!(jobs, vec!["Sales".to_string(), "Support".to_string()]);
    assert_eq!(applications, vec!["Sales".to_string(), "Sales".to_string()]);

    Ok(())
}
