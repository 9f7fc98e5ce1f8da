use super::*;

/// Tests storing interviewer feedback.
///
/// Expected: Ok with status completed, score equal to the rating and the payload stored
#[tokio::test]
async fn completes_with_score_and_payload() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, _applicant, _interviewer, _application, interview) =
        factory::helpers::create_interview_with_dependencies(db).await?;

    let repo = InterviewRepository::new(db);
    let completed = repo
        .record_feedback(
            interview.id,
            &InterviewFeedback {
                rating: 4.0,
                notes: Some("Strong".to_string()),
                recommendation: None,
            },
        )
        .await?;

    assert_eq!(completed.status, InterviewStatus::Completed);
    assert_eq!(completed.score, Some(4.0));
    let feedback = completed.feedback.unwrap();
    assert_eq!(feedback["rating"], 4.0);
    assert_eq!(feedback["notes"], "Strong");

    Ok(())
}
