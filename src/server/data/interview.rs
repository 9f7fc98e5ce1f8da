//! Interview data repository for database operations.
//!
//! This module provides the `InterviewRepository` for scheduling interviews, listing them
//! within a viewer's scope, and writing status changes, feedback and reschedules.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::{
    model::interview::InterviewStatus,
    server::model::interview::{
        Interview, InterviewFeedback, InterviewScope, ScheduleInterviewParams,
        UpdateInterviewParams,
    },
};

pub struct InterviewRepository<'a> {
    db: &'a DatabaseConnection,
}

/// Restricts an interview query to what `scope` may see.
fn scoped(scope: InterviewScope) -> Select<entity::interview::Entity> {
    let query = entity::prelude::Interview::find();
    match scope {
        InterviewScope::All => query,
        InterviewScope::Interviewer(user_id) => {
            query.filter(entity::interview::Column::InterviewerId.eq(user_id))
        }
        InterviewScope::Applicant(user_id) => query
            .inner_join(entity::prelude::JobApplication)
            .filter(entity::job_application::Column::ApplicantId.eq(user_id)),
    }
}

impl<'a> InterviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new interview in `scheduled` status.
    ///
    /// # Arguments
    /// - `params` - Schedule parameters
    /// - `title` - Resolved title, used when `params.title` is absent
    pub async fn create(
        &self,
        params: ScheduleInterviewParams,
        title: String,
    ) -> Result<Interview, DbErr> {
        let now = Utc::now();
        let entity = entity::interview::ActiveModel {
            job_application_id: ActiveValue::Set(params.job_application_id),
            interviewer_id: ActiveValue::Set(params.interviewer_id),
            scheduled_by_id: ActiveValue::Set(params.scheduled_by_id),
            title: ActiveValue::Set(params.title.unwrap_or(title)),
            description: ActiveValue::Set(params.description),
            interview_type: ActiveValue::Set(params.interview_type.as_str().to_string()),
            status: ActiveValue::Set(InterviewStatus::Scheduled.as_str().to_string()),
            scheduled_at: ActiveValue::Set(params.scheduled_at),
            end_time: ActiveValue::Set(params.end_time),
            location: ActiveValue::Set(params.location),
            meeting_link: ActiveValue::Set(params.meeting_link),
            notes: ActiveValue::Set(None),
            score: ActiveValue::Set(None),
            feedback: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Interview::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Interview>, DbErr> {
        entity::prelude::Interview::find_by_id(id)
            .one(self.db)
            .await?
            .map(Interview::from_entity)
            .transpose()
    }

    /// Lists interviews visible in `scope`, earliest first.
    pub async fn list(&self, scope: InterviewScope) -> Result<Vec<Interview>, DbErr> {
        scoped(scope)
            .order_by_asc(entity::interview::Column::ScheduledAt)
            .order_by_asc(entity::interview::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Interview::from_entity)
            .collect()
    }

    /// Lists interviews in `scope` still in `scheduled` status with a start after `now`.
    ///
    /// Rescheduled interviews are not included.
    pub async fn upcoming(
        &self,
        scope: InterviewScope,
        now: DateTime<Utc>,
    ) -> Result<Vec<Interview>, DbErr> {
        scoped(scope)
            .filter(entity::interview::Column::ScheduledAt.gt(now))
            .filter(entity::interview::Column::Status.eq(InterviewStatus::Scheduled.as_str()))
            .order_by_asc(entity::interview::Column::ScheduledAt)
            .order_by_asc(entity::interview::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Interview::from_entity)
            .collect()
    }

    /// Applies a partial update of descriptive fields. Status is never touched.
    ///
    /// # Returns
    /// - `Ok(Interview)` - The updated interview
    /// - `Err(DbErr::RecordNotFound)` - No interview with that ID
    pub async fn update(&self, id: i32, params: UpdateInterviewParams) -> Result<Interview, DbErr> {
        let interview = entity::prelude::Interview::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Interview with id {} not found",
                id
            )))?;

        let mut active_model: entity::interview::ActiveModel = interview.into();
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(interview_type) = params.interview_type {
            active_model.interview_type = ActiveValue::Set(interview_type.as_str().to_string());
        }
        if let Some(interviewer_id) = params.interviewer_id {
            active_model.interviewer_id = ActiveValue::Set(interviewer_id);
        }
        if let Some(end_time) = params.end_time {
            active_model.end_time = ActiveValue::Set(Some(end_time));
        }
        if let Some(location) = params.location {
            active_model.location = ActiveValue::Set(Some(location));
        }
        if let Some(meeting_link) = params.meeting_link {
            active_model.meeting_link = ActiveValue::Set(Some(meeting_link));
        }
        if let Some(notes) = params.notes {
            active_model.notes = ActiveValue::Set(Some(notes));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Interview::from_entity(active_model.update(self.db).await?)
    }

    /// Writes a new status, replacing notes when `notes` is provided.
    ///
    /// Callers validate the transition first.
    pub async fn set_status(
        &self,
        id: i32,
        status: InterviewStatus,
        notes: Option<String>,
    ) -> Result<Interview, DbErr> {
        let mut active_model = entity::interview::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status.as_str().to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };
        if let Some(notes) = notes {
            active_model.notes = ActiveValue::Set(Some(notes));
        }

        Interview::from_entity(active_model.update(self.db).await?)
    }

    /// Stores interviewer feedback, sets `score` to the rating and marks the interview
    /// `completed`.
    pub async fn record_feedback(
        &self,
        id: i32,
        feedback: &InterviewFeedback,
    ) -> Result<Interview, DbErr> {
        let entity = entity::interview::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(InterviewStatus::Completed.as_str().to_string()),
            score: ActiveValue::Set(Some(feedback.rating)),
            feedback: ActiveValue::Set(Some(feedback.to_json())),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Interview::from_entity(entity)
    }

    /// Moves an interview to a new time and marks it `rescheduled`.
    pub async fn reschedule(
        &self,
        id: i32,
        scheduled_at: DateTime<Utc>,
        end_time: Option<DateTime<Utc>>,
    ) -> Result<Interview, DbErr> {
        let entity = entity::interview::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(InterviewStatus::Rescheduled.as_str().to_string()),
            scheduled_at: ActiveValue::Set(scheduled_at),
            end_time: ActiveValue::Set(end_time),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Interview::from_entity(entity)
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Interview::find().count(self.db).await
    }

    pub async fn count_by_status(&self, status: InterviewStatus) -> Result<u64, DbErr> {
        entity::prelude::Interview::find()
            .filter(entity::interview::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }

    /// Counts interviews matching the `upcoming` filter across all users.
    pub async fn count_upcoming(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::Interview::find()
            .filter(entity::interview::Column::ScheduledAt.gt(now))
            .filter(entity::interview::Column::Status.eq(InterviewStatus::Scheduled.as_str()))
            .count(self.db)
            .await
    }
}
