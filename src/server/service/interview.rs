//! Interview scheduling, feedback and visibility rules.
//!
//! HR staff see and manage every interview. Interviewers see the interviews assigned to
//! them and are the only users who may submit feedback on those. Applicants see the
//! interviews attached to their own applications.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::interview::InterviewStatus,
    server::{
        data::{
            application::ApplicationRepository, interview::InterviewRepository,
            job::JobRepository, user::UserRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            application::Application,
            interview::{
                Interview, InterviewFeedback, InterviewScope, InterviewStatistics,
                ScheduleInterviewParams, UpdateInterviewParams,
            },
            lifecycle::StatusLifecycle,
            user::User,
        },
        service::notification::NotificationService,
    },
};

/// Feedback ratings are on a one to five scale.
const RATING_RANGE: std::ops::RangeInclusive<f64> = 1.0..=5.0;

pub struct InterviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InterviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules an interview and notifies the applicant.
    ///
    /// # Returns
    /// - `Ok(Interview)` - The new interview in `scheduled` status
    /// - `Err(AuthError::AccessDenied)` - Scheduler's role can't schedule interviews
    /// - `Err(AppError::NotFound)` - Application or interviewer doesn't exist
    pub async fn schedule(
        &self,
        params: ScheduleInterviewParams,
        scheduler: &User,
    ) -> Result<Interview, AppError> {
        if !scheduler.role.can_schedule_interviews() {
            return Err(AuthError::AccessDenied(
                scheduler.id,
                "User is not allowed to schedule interviews".to_string(),
            )
            .into());
        }

        let application = self.find_application(params.job_application_id).await?;
        if UserRepository::new(self.db)
            .find_by_id(params.interviewer_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Interviewer not found".to_string()));
        }
        if let Some(end_time) = params.end_time {
            if end_time <= params.scheduled_at {
                return Err(AppError::BadRequest(
                    "endTime must be after scheduledAt".to_string(),
                ));
            }
        }

        let job_title = JobRepository::new(self.db)
            .find_by_id(application.job_id)
            .await?
            .map(|job| job.title)
            .unwrap_or_default();
        let fallback_title = format!("Interview for {}", job_title);

        let interview = InterviewRepository::new(self.db)
            .create(params, fallback_title)
            .await?;

        tracing::info!(
            "Interview {} scheduled for application {} by user {}",
            interview.id,
            interview.job_application_id,
            scheduler.id
        );

        NotificationService::new(self.db)
            .interview_scheduled(&interview, application.applicant_id)
            .await?;

        Ok(interview)
    }

    /// Fetches an interview visible to `actor`.
    ///
    /// # Returns
    /// - `Ok(Interview)` - Actor is HR staff, the interviewer or the applicant
    /// - `Err(AppError::NotFound)` - No interview with that ID
    /// - `Err(AuthError::AccessDenied)` - Actor is none of those
    pub async fn get(&self, id: i32, actor: &User) -> Result<Interview, AppError> {
        let interview = self.find(id).await?;

        if actor.role.is_hr_staff() || interview.interviewer_id == actor.id {
            return Ok(interview);
        }

        let application = self.find_application(interview.job_application_id).await?;
        if application.applicant_id == actor.id {
            return Ok(interview);
        }

        Err(AuthError::AccessDenied(
            actor.id,
            format!("User is not allowed to view interview {}", id),
        )
        .into())
    }

    /// Lists the interviews `user` may see, earliest first.
    pub async fn list_for(&self, user: &User) -> Result<Vec<Interview>, AppError> {
        Ok(InterviewRepository::new(self.db)
            .list(InterviewScope::for_user(user))
            .await?)
    }

    /// Lists `scheduled` interviews starting after now that `user` may see.
    pub async fn upcoming(&self, user: &User) -> Result<Vec<Interview>, AppError> {
        Ok(InterviewRepository::new(self.db)
            .upcoming(InterviewScope::for_user(user), Utc::now())
            .await?)
    }

    pub async fn update(&self, id: i32, params: UpdateInterviewParams) -> Result<Interview, AppError> {
        self.find(id).await?;

        if let Some(interviewer_id) = params.interviewer_id {
            if UserRepository::new(self.db)
                .find_by_id(interviewer_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Interviewer not found".to_string()));
            }
        }

        Ok(InterviewRepository::new(self.db).update(id, params).await?)
    }

    /// Records the assigned interviewer's feedback and completes the interview.
    ///
    /// # Returns
    /// - `Ok(Interview)` - The interview in `completed` status with score and feedback
    /// - `Err(AppError::BadRequest)` - Rating outside 1 to 5
    /// - `Err(AppError::NotFound)` - No interview with that ID
    /// - `Err(AuthError::AccessDenied)` - Actor is not the assigned interviewer
    /// - `Err(AppError::TransitionErr)` - Interview can no longer be completed
    pub async fn submit_feedback(
        &self,
        id: i32,
        feedback: InterviewFeedback,
        actor: &User,
    ) -> Result<Interview, AppError> {
        if !RATING_RANGE.contains(&feedback.rating) {
            return Err(AppError::BadRequest(
                "rating must be between 1 and 5".to_string(),
            ));
        }

        let interview = self.find(id).await?;
        if interview.interviewer_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("Only the assigned interviewer can submit feedback for interview {}", id),
            )
            .into());
        }

        interview.status.ensure_transition(InterviewStatus::Completed)?;

        let completed = InterviewRepository::new(self.db)
            .record_feedback(id, &feedback)
            .await?;

        tracing::info!("Feedback submitted for interview {} by user {}", id, actor.id);
        Ok(completed)
    }

    /// Cancels an interview, appending the reason to its notes.
    pub async fn cancel(&self, id: i32, reason: Option<&str>) -> Result<Interview, AppError> {
        let interview = self.find(id).await?;
        interview.status.ensure_transition(InterviewStatus::Cancelled)?;

        let notes = interview.notes_with_cancellation(reason);
        let cancelled = InterviewRepository::new(self.db)
            .set_status(id, InterviewStatus::Cancelled, Some(notes))
            .await?;

        tracing::info!("Interview {} cancelled", id);
        Ok(cancelled)
    }

    /// Moves an interview to a new start time.
    pub async fn reschedule(
        &self,
        id: i32,
        scheduled_at: DateTime<Utc>,
        end_time: Option<DateTime<Utc>>,
    ) -> Result<Interview, AppError> {
        if let Some(end_time) = end_time {
            if end_time <= scheduled_at {
                return Err(AppError::BadRequest(
                    "endTime must be after scheduledAt".to_string(),
                ));
            }
        }

        let interview = self.find(id).await?;
        interview.status.ensure_transition(InterviewStatus::Rescheduled)?;

        let rescheduled = InterviewRepository::new(self.db)
            .reschedule(id, scheduled_at, end_time)
            .await?;

        tracing::info!("Interview {} rescheduled to {}", id, scheduled_at);
        Ok(rescheduled)
    }

    pub async fn mark_no_show(&self, id: i32) -> Result<Interview, AppError> {
        let interview = self.find(id).await?;
        interview.status.ensure_transition(InterviewStatus::NoShow)?;

        Ok(InterviewRepository::new(self.db)
            .set_status(id, InterviewStatus::NoShow, None)
            .await?)
    }

    pub async fn statistics(&self) -> Result<InterviewStatistics, AppError> {
        let repo = InterviewRepository::new(self.db);

        Ok(InterviewStatistics {
            total: repo.count_all().await?,
            scheduled: repo.count_by_status(InterviewStatus::Scheduled).await?,
            completed: repo.count_by_status(InterviewStatus::Completed).await?,
            cancelled: repo.count_by_status(InterviewStatus::Cancelled).await?,
            rescheduled: repo.count_by_status(InterviewStatus::Rescheduled).await?,
            no_show: repo.count_by_status(InterviewStatus::NoShow).await?,
            upcoming: repo.count_upcoming(Utc::now()).await?,
        })
    }

    async fn find(&self, id: i32) -> Result<Interview, AppError> {
        InterviewRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Interview not found".to_string()))
    }

    async fn find_application(&self, id: i32) -> Result<Application, AppError> {
        ApplicationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))
    }
}
