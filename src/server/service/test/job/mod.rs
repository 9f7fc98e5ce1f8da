use crate::{
    model::job::{JobStatus, JobType},
    server::{
        error::{auth::AuthError, AppError},
        model::job::{CreateJobParams, UpdateJobParams},
        service::job::JobService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod transitions;
mod update;

fn create_params(created_by_id: i32) -> CreateJobParams {
    CreateJobParams {
        title: "Data Analyst".to_string(),
        description: "Analyse hiring data".to_string(),
        requirements: None,
        benefits: None,
        department: "Analytics".to_string(),
        location: "Lisbon".to_string(),
        job_type: JobType::FullTime,
        experience_level: None,
        salary_min: None,
        salary_max: None,
        application_deadline: None,
        created_by_id,
    }
}
