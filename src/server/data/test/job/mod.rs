use crate::{
    model::job::{JobStatus, JobType},
    server::{
        data::job::JobRepository,
        model::job::{CreateJobParams, JobFilters, UpdateJobParams},
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list;
mod set_status;
mod update;

fn create_params(created_by_id: i32) -> CreateJobParams {
    CreateJobParams {
        title: "Platform Engineer".to_string(),
        description: "Run the platform".to_string(),
        requirements: Some("Rust".to_string()),
        benefits: None,
        department: "Engineering".to_string(),
        location: "Berlin".to_string(),
        job_type: JobType::Contract,
        experience_level: None,
        salary_min: Some(50_000),
        salary_max: Some(70_000),
        application_deadline: None,
        created_by_id,
    }
}
