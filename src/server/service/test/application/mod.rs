use crate::{
    model::application::ApplicationStatus,
    server::{
        data::{application::ApplicationRepository, notification::NotificationRepository},
        error::{auth::AuthError, AppError},
        model::{
            application::{BulkUpdateParams, CreateApplicationParams},
            notification::NotificationListParams,
        },
        service::{application::ApplicationService, test::as_user},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod bulk_update;
mod update_status;
mod withdraw;

fn apply_params(job_id: i32, applicant_id: i32) -> CreateApplicationParams {
    CreateApplicationParams {
        job_id,
        applicant_id,
        cover_letter: Some("I would love to join".to_string()),
        resume: None,
    }
}
