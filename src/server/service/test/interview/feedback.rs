use super::*;

/// Tests feedback from the assigned interviewer.
///
/// Expected: Ok with status completed, score 4 and the payload stored
#[tokio::test]
async fn interviewer_feedback_completes_interview() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, _applicant, interviewer, _application, interview) =
        factory::helpers::create_interview_with_dependencies(db).await?;

    let completed = InterviewService::new(db)
        .submit_feedback(
            interview.id,
            InterviewFeedback {
                rating: 4.0,
                notes: Some("Clear communicator".to_string()),
                recommendation: Some("hire".to_string()),
            },
            &as_user(interviewer),
        )
        .await?;

    assert_eq!(completed.status, InterviewStatus::Completed);
    assert_eq!(completed.score, Some(4.0));
    let feedback = completed.feedback.unwrap();
    assert_eq!(feedback["rating"], 4.0);
    assert_eq!(feedback["notes"], "Clear communicator");
    assert_eq!(feedback["recommendation"], "hire");

    Ok(())
}

/// Tests feedback from a user other than the assigned interviewer.
///
/// Expected: Err(AccessDenied) and the interview still scheduled
#[tokio::test]
async fn other_user_cannot_submit_feedback() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, _applicant, _interviewer, _application, interview) =
        factory::helpers::create_interview_with_dependencies(db).await?;
    let service = InterviewService::new(db);

    let result = service
        .submit_feedback(
            interview.id,
            InterviewFeedback {
                rating: 4.0,
                notes: None,
                recommendation: None,
            },
            &as_user(hr.clone()),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    let stored = service.get(interview.id, &as_user(hr)).await?;
    assert_eq!(stored.status, InterviewStatus::Scheduled);

    Ok(())
}

/// Tests a rating outside the one to five scale.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_out_of_range_rating() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, _applicant, interviewer, _application, interview) =
        factory::helpers::create_interview_with_dependencies(db).await?;

    let result = InterviewService::new(db)
        .submit_feedback(
            interview.id,
            InterviewFeedback {
                rating: 9.0,
                notes: None,
                recommendation: None,
            },
            &as_user(interviewer),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
