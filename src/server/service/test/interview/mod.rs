use crate::{
    model::interview::{InterviewStatus, InterviewType},
    server::{
        data::notification::NotificationRepository,
        error::{auth::AuthError, AppError},
        model::interview::{InterviewFeedback, ScheduleInterviewParams},
        service::{interview::InterviewService, test::as_user},
    },
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod cancel;
mod feedback;
mod schedule;
mod visibility;
