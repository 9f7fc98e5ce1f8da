use crate::{
    model::interview::InterviewStatus,
    server::{data::interview::InterviewRepository, model::interview::{InterviewFeedback, InterviewScope}},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod list;
mod record_feedback;
mod upcoming;
