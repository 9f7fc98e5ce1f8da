//! Interview domain models, parameters and the interview status machine.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde_json::{json, Value};

use crate::{
    model::{
        interview::{
            InterviewDto, InterviewFeedbackDto, InterviewStatisticsDto, InterviewStatus,
            InterviewType, ScheduleInterviewDto, UpdateInterviewDto,
        },
        user::Role,
    },
    server::model::{lifecycle::StatusLifecycle, parse_column, user::User},
};

impl StatusLifecycle for InterviewStatus {
    const ENTITY: &'static str = "interview";

    fn allowed_transitions(self) -> &'static [Self] {
        use InterviewStatus::*;
        match self {
            Scheduled => &[Completed, Cancelled, Rescheduled, NoShow],
            Rescheduled => &[Completed, Cancelled, NoShow, Rescheduled],
            Completed | Cancelled | NoShow => &[],
        }
    }

    fn label(self) -> &'static str {
        self.as_str()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interview {
    pub id: i32,
    pub job_application_id: i32,
    pub interviewer_id: i32,
    pub scheduled_by_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub interview_type: InterviewType,
    pub status: InterviewStatus,
    pub scheduled_at: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub notes: Option<String>,
    pub score: Option<f64>,
    pub feedback: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Interview {
    pub fn from_entity(entity: entity::interview::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            interview_type: parse_column(&entity.interview_type)?,
            status: parse_column(&entity.status)?,
            job_application_id: entity.job_application_id,
            interviewer_id: entity.interviewer_id,
            scheduled_by_id: entity.scheduled_by_id,
            title: entity.title,
            description: entity.description,
            scheduled_at: entity.scheduled_at,
            end_time: entity.end_time,
            location: entity.location,
            meeting_link: entity.meeting_link,
            notes: entity.notes,
            score: entity.score,
            feedback: entity.feedback,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> InterviewDto {
        InterviewDto {
            id: self.id,
            job_application_id: self.job_application_id,
            interviewer_id: self.interviewer_id,
            scheduled_by_id: self.scheduled_by_id,
            title: self.title,
            description: self.description,
            interview_type: self.interview_type,
            status: self.status,
            scheduled_at: self.scheduled_at,
            end_time: self.end_time,
            location: self.location,
            meeting_link: self.meeting_link,
            notes: self.notes,
            score: self.score,
            feedback: self.feedback,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Notes after cancelling, with a `Cancelled` line appended.
    pub fn notes_with_cancellation(&self, reason: Option<&str>) -> String {
        let line = match reason.map(str::trim).filter(|r| !r.is_empty()) {
            Some(reason) => format!("Cancelled: {}", reason),
            None => "Cancelled".to_string(),
        };

        match self.notes.as_deref().filter(|n| !n.is_empty()) {
            Some(existing) => format!("{}\n{}", existing, line),
            None => line,
        }
    }
}

/// Which interviews a user may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewScope {
    /// HR staff see every interview.
    All,
    /// Interviewers see interviews assigned to them.
    Interviewer(i32),
    /// Applicants see interviews for their own applications.
    Applicant(i32),
}

impl InterviewScope {
    pub fn for_user(user: &User) -> Self {
        if user.role.is_hr_staff() {
            InterviewScope::All
        } else if user.role == Role::Interviewer {
            InterviewScope::Interviewer(user.id)
        } else {
            InterviewScope::Applicant(user.id)
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScheduleInterviewParams {
    pub job_application_id: i32,
    pub interviewer_id: i32,
    pub scheduled_by_id: i32,
    /// Defaults to `Interview for <job title>`.
    pub title: Option<String>,
    pub description: Option<String>,
    pub interview_type: InterviewType,
    pub scheduled_at: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
}

impl ScheduleInterviewParams {
    pub fn from_dto(scheduled_by_id: i32, dto: ScheduleInterviewDto) -> Self {
        Self {
            job_application_id: dto.job_application_id,
            interviewer_id: dto.interviewer_id,
            scheduled_by_id,
            title: dto.title.filter(|t| !t.trim().is_empty()),
            description: dto.description,
            interview_type: dto.interview_type.unwrap_or(InterviewType::Video),
            scheduled_at: dto.scheduled_at,
            end_time: dto.end_time,
            location: dto.location,
            meeting_link: dto.meeting_link,
        }
    }
}

/// Partial update of an interview's descriptive fields.
#[derive(Debug, Clone, Default)]
pub struct UpdateInterviewParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub interview_type: Option<InterviewType>,
    pub interviewer_id: Option<i32>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub notes: Option<String>,
}

impl UpdateInterviewParams {
    pub fn from_dto(dto: UpdateInterviewDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            interview_type: dto.interview_type,
            interviewer_id: dto.interviewer_id,
            end_time: dto.end_time,
            location: dto.location,
            meeting_link: dto.meeting_link,
            notes: dto.notes,
        }
    }
}

/// Interviewer's assessment, stored as the interview's feedback payload.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewFeedback {
    pub rating: f64,
    pub notes: Option<String>,
    pub recommendation: Option<String>,
}

impl InterviewFeedback {
    pub fn from_dto(dto: InterviewFeedbackDto) -> Self {
        Self {
            rating: dto.rating,
            notes: dto.notes,
            recommendation: dto.recommendation,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "rating": self.rating,
            "notes": self.notes,
            "recommendation": self.recommendation,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterviewStatistics {
    pub total: u64,
    pub scheduled: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub rescheduled: u64,
    pub no_show: u64,
    pub upcoming: u64,
}

impl InterviewStatistics {
    pub fn into_dto(self) -> InterviewStatisticsDto {
        InterviewStatisticsDto {
            total: self.total,
            scheduled: self.scheduled,
            completed: self.completed,
            cancelled: self.cancelled,
            rescheduled: self.rescheduled,
            no_show: self.no_show,
            upcoming: self.upcoming,
        }
    }
}
