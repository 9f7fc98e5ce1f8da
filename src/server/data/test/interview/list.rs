use super::*;

/// Tests that each scope sees the right interviews.
///
/// Creates interviews for two applicants with two different interviewers and lists them
/// as HR, as one interviewer and as one applicant.
///
/// Expected: Ok with all interviews for HR and only related ones otherwise
#[tokio::test]
async fn scopes_by_viewer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, applicant, interviewer, _application, first) =
        factory::helpers::create_interview_with_dependencies(db).await?;
    let (_hr2, _other_applicant, _other_interviewer, _other_application, _second) =
        factory::helpers::create_interview_with_dependencies(db).await?;

    let repo = InterviewRepository::new(db);

    assert_eq!(repo.list(InterviewScope::All).await?.len(), 2);

    let mine = repo.list(InterviewScope::Interviewer(interviewer.id)).await?;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, first.id);

    let own = repo.list(InterviewScope::Applicant(applicant.id)).await?;
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].id, first.id);

    assert!(repo.list(InterviewScope::Applicant(hr.id)).await?.is_empty());

    Ok(())
}

/// Tests ordering by start time.
///
/// Expected: Ok with the earlier interview first
#[tokio::test]
async fn orders_by_scheduled_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, _applicant, interviewer, application, later) =
        factory::helpers::create_interview_with_dependencies(db).await?;
    let earlier = factory::interview::InterviewFactory::new(db, application.id, interviewer.id, hr.id)
        .scheduled_at(Utc::now() + Duration::hours(2))
        .build()
        .await?;

    let repo = InterviewRepository::new(db);
    let interviews = repo.list(InterviewScope::All).await?;

    let ids: Vec<i32> = interviews.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}
