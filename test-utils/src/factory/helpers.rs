//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// Keeps factory-generated emails and titles distinct across a test run.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a published job with an HR creator.
///
/// Creates:
/// 1. User with the `hr_manager` role
/// 2. Job in `published` status created by that user
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((hr, job))` - Tuple of the creator and the published job
/// - `Err(DbErr)` - Database error during creation
pub async fn create_published_job(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::job::Model), DbErr> {
    let hr = crate::factory::user::create_user_with_role(db, "hr_manager").await?;
    let job = crate::factory::job::JobFactory::new(db, hr.id)
        .published()
        .build()
        .await?;

    Ok((hr, job))
}

/// Creates a submitted application with all dependencies.
///
/// Creates:
/// 1. User with the `hr_manager` role
/// 2. Published job created by that user
/// 3. User with the `applicant` role
/// 4. Application in `submitted` status
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((hr, applicant, job, application))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_application_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::job::Model,
        entity::job_application::Model,
    ),
    DbErr,
> {
    let (hr, job) = create_published_job(db).await?;
    let applicant = crate::factory::user::create_user(db).await?;
    let application =
        crate::factory::job_application::create_application(db, job.id, applicant.id).await?;

    Ok((hr, applicant, job, application))
}

/// Creates a scheduled interview with all dependencies.
///
/// Builds on `create_application_with_dependencies` and adds a user with the
/// `interviewer` role plus an interview one day in the future.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((hr, applicant, interviewer, application, interview))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_interview_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::user::Model,
        entity::job_application::Model,
        entity::interview::Model,
    ),
    DbErr,
> {
    let (hr, applicant, _job, application) = create_application_with_dependencies(db).await?;
    let interviewer = crate::factory::user::create_user_with_role(db, "interviewer").await?;
    let interview =
        crate::factory::interview::InterviewFactory::new(db, application.id, interviewer.id, hr.id)
            .build()
            .await?;

    Ok((hr, applicant, interviewer, application, interview))
}
