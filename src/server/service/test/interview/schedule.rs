use super::*;

/// Tests scheduling without a title.
///
/// Expected: Ok with the title derived from the job and the applicant notified
#[tokio::test]
async fn defaults_title_from_job() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hr, applicant, job, application) =
        factory::helpers::create_application_with_dependencies(db).await?;
    let interviewer = factory::create_user_with_role(db, "interviewer").await?;

    let interview = InterviewService::new(db)
        .schedule(
            ScheduleInterviewParams {
                job_application_id: application.id,
                interviewer_id: interviewer.id,
                scheduled_by_id: hr.id,
                title: None,
                description: None,
                interview_type: InterviewType::Video,
                scheduled_at: Utc::now() + Duration::days(2),
                end_time: None,
                location: None,
                meeting_link: None,
            },
            &as_user(hr),
        )
        .await?;

    assert_eq!(interview.title, format!("Interview for {}", job.title));
    assert_eq!(interview.status, InterviewStatus::Scheduled);
    assert_eq!(
        NotificationRepository::new(db).count_unread(applicant.id).await?,
        1
    );

    Ok(())
}

/// Tests scheduling by an applicant.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn applicant_cannot_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hr_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_hr, applicant, _job, application) =
        factory::helpers::create_application_with_dependencies(db).await?;
    let interviewer = factory::create_user_with_role(db, "interviewer").await?;

    let result = InterviewService::new(db)
        .schedule(
            ScheduleInterviewParams {
                job_application_id: application.id,
                interviewer_id: interviewer.id,
                scheduled_by_id: applicant.id,
                title: Some("Chat".to_string()),
                description: None,
                interview_type: InterviewType::Phone,
                scheduled_at: Utc::now() + Duration::days(1),
                end_time: None,
                location: None,
                meeting_link: None,
            },
            &as_user(applicant),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
