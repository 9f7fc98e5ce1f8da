use super::*;

/// Tests the hiring pipeline stage mapping.
///
/// Expected: Ok with each stage counting its mapped status only
#[tokio::test]
async fn pipeline_maps_statuses_to_stages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, job) = factory::helpers::create_published_job(db).await?;
    for status in ["submitted", "submitted", "under_review", "interviewing", "accepted"] {
        let applicant = factory::create_user(db).await?;
        factory::job_application::ApplicationFactory::new(db, job.id, applicant.id)
            .status(status)
            .build()
            .await?;
    }

    let pipeline = ReportService::new(db).hiring_pipeline().await?;

    assert_eq!(pipeline.applied, 2);
    assert_eq!(pipeline.screening, 1);
    assert_eq!(pipeline.interview, 1);
    assert_eq!(pipeline.offer, 0);
    assert_eq!(pipeline.hired, 1);

    Ok(())
}

/// Tests dashboard totals over a small data set.
///
/// Expected: Ok with job, application, document and interview totals
#[tokio::test]
async fn dashboard_counts_everything() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, applicant, _interviewer, _application, _interview) =
        factory::helpers::create_interview_with_dependencies(db).await?;
    factory::create_job(db, hr.id).await?;
    factory::create_document(db, applicant.id).await?;

    let dashboard = ReportService::new(db).dashboard().await?;

    assert_eq!(dashboard.totals.jobs, 2);
    assert_eq!(dashboard.totals.active_jobs, 1);
    assert_eq!(dashboard.totals.applications, 1);
    assert_eq!(dashboard.totals.pending_applications, 1);
    assert_eq!(dashboard.totals.documents, 1);
    assert_eq!(dashboard.totals.pending_documents, 1);
    assert_eq!(dashboard.totals.interviews, 1);
    assert_eq!(dashboard.totals.upcoming_interviews, 1);
    assert_eq!(dashboard.monthly_applications.len(), 1);
    assert_eq!(dashboard.applications_by_status.get("submitted"), Some(&1));

    Ok(())
}

/// Tests department statistics across two departments.
///
/// Expected: Ok with per-department job and application counts, sorted by name
#[tokio::test]
async fn department_stats_group_by_department() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, engineering) = factory::helpers::create_published_job(db).await?;
    factory::job::JobFactory::new(db, hr.id)
        .department("Design")
        .build()
        .await?;
    let applicant = factory::create_user(db).await?;
    factory::create_application(db, engineering.id, applicant.id).await?;

    let stats = ReportService::new(db).department_stats().await?;

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].department, "Design");
    assert_eq!((stats[0].jobs, stats[0].applications), (1, 0));
    assert_eq!(stats[1].department, "Engineering");
    assert_eq!((stats[1].jobs, stats[1].applications), (1, 1));

    Ok(())
}
