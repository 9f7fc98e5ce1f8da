use crate::{
    model::application::ApplicationStatus,
    server::{data::report::ReportRepository, model::report::DateRange},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod application_export_rows;
mod departments;
mod status_counts;
