use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

string_enum! {
    pub enum InterviewType {
        Phone => "phone",
        Video => "video",
        InPerson => "in_person",
        Panel => "panel",
        Technical => "technical",
    }
}

string_enum! {
    pub enum InterviewStatus {
        Scheduled => "scheduled",
        Completed => "completed",
        Cancelled => "cancelled",
        Rescheduled => "rescheduled",
        NoShow => "no_show",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterviewDto {
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
    #[schema(value_type = Option<Object>)]
    pub feedback: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInterviewDto {
    pub job_application_id: i32,
    pub interviewer_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub interview_type: Option<InterviewType>,
    pub scheduled_at: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterviewDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub interview_type: Option<InterviewType>,
    pub interviewer_id: Option<i32>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InterviewFeedbackDto {
    pub rating: f64,
    pub notes: Option<String>,
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CancelInterviewDto {
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleInterviewDto {
    pub scheduled_at: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InterviewStatisticsDto {
    pub total: u64,
    pub scheduled: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub rescheduled: u64,
    pub no_show: u64,
    pub upcoming: u64,
}
