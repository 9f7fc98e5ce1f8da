use super::*;

/// Tests cancelling with a reason.
///
/// Expected: Ok with status cancelled and the reason appended to notes
#[tokio::test]
async fn cancel_appends_reason() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, _applicant, _interviewer, _application, interview) =
        factory::helpers::create_interview_with_dependencies(db).await?;

    let cancelled = InterviewService::new(db)
        .cancel(interview.id, Some("Candidate unavailable"))
        .await?;

    assert_eq!(cancelled.status, InterviewStatus::Cancelled);
    assert_eq!(
        cancelled.notes.as_deref(),
        Some("Cancelled: Candidate unavailable")
    );

    Ok(())
}

/// Tests that a cancelled interview cannot be rescheduled or completed.
///
/// Expected: Err(TransitionErr) for both
#[tokio::test]
async fn cancelled_interview_is_final() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, _applicant, interviewer, _application, interview) =
        factory::helpers::create_interview_with_dependencies(db).await?;
    let service = InterviewService::new(db);
    service.cancel(interview.id, None).await?;

    let rescheduled = service
        .reschedule(interview.id, Utc::now() + Duration::days(3), None)
        .await;
    let feedback = service
        .submit_feedback(
            interview.id,
            InterviewFeedback {
                rating: 3.0,
                notes: None,
                recommendation: None,
            },
            &as_user(interviewer),
        )
        .await;

    assert!(matches!(rescheduled, Err(AppError::TransitionErr(_))));
    assert!(matches!(feedback, Err(AppError::TransitionErr(_))));

    Ok(())
}

/// Tests that a rescheduled interview drops out of the upcoming list.
///
/// Expected: Ok with the interview rescheduled and no upcoming interviews
#[tokio::test]
async fn rescheduled_is_not_upcoming() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, _applicant, _interviewer, _application, interview) =
        factory::helpers::create_interview_with_dependencies(db).await?;
    let service = InterviewService::new(db);

    let rescheduled = service
        .reschedule(interview.id, Utc::now() + Duration::days(5), None)
        .await?;

    assert_eq!(rescheduled.status, InterviewStatus::Rescheduled);
    assert!(service.upcoming(&as_user(hr)).await?.is_empty());

    Ok(())
}
