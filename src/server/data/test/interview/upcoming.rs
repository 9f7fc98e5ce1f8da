use super::*;

/// Tests the upcoming filter.
///
/// Only interviews still in `scheduled` status and starting in the future count. A past
/// scheduled interview, a future completed one and a future rescheduled one are excluded.
///
/// Expected: Ok with only the future scheduled interview
#[tokio::test]
async fn only_future_scheduled_interviews() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, _applicant, interviewer, application, upcoming) =
        factory::helpers::create_interview_with_dependencies(db).await?;
    let build = |status: &str, offset: Duration| {
        factory::interview::InterviewFactory::new(db, application.id, interviewer.id, hr.id)
            .status(status)
            .scheduled_at(Utc::now() + offset)
    };
    build("scheduled", Duration::days(-1)).build().await?;
    build("completed", Duration::days(2)).build().await?;
    build("rescheduled", Duration::days(3)).build().await?;

    let repo = InterviewRepository::new(db);
    let interviews = repo.upcoming(InterviewScope::All, Utc::now()).await?;

    assert_eq!(interviews.len(), 1);
    assert_eq!(interviews[0].id, upcoming.id);
    assert_eq!(repo.count_upcoming(Utc::now()).await?, 1);

    Ok(())
}
