//! Application ledger business logic.
//!
//! `ApplicationService` guards who may apply, view and withdraw, validates every status
//! change against the application transition table, and sends the applicant a notice
//! for each submission and status change. Bulk updates run in one transaction so a
//! single invalid row leaves every row untouched.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DatabaseTransaction, SqlErr, TransactionTrait};

use crate::{
    model::application::ApplicationStatus,
    server::{
        data::{application::ApplicationRepository, job::JobRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            application::{
                Application, ApplicationPage, ApplicationSearchParams, ApplicationStatistics,
                BulkUpdateParams, CreateApplicationParams,
            },
            lifecycle::StatusLifecycle,
            user::User,
        },
        service::notification::NotificationService,
    },
};

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits an application and notifies the applicant.
    ///
    /// # Returns
    /// - `Ok(Application)` - The new application in `submitted` status
    /// - `Err(AppError::NotFound)` - Job or applicant doesn't exist
    /// - `Err(AppError::BadRequest)` - Job is not open for applications
    /// - `Err(AppError::Conflict)` - Applicant already applied to this job
    pub async fn create(&self, params: CreateApplicationParams) -> Result<Application, AppError> {
        let job = JobRepository::new(self.db)
            .find_by_id(params.job_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

        if UserRepository::new(self.db)
            .find_by_id(params.applicant_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Applicant not found".to_string()));
        }

        if !job.status.accepts_applications() {
            return Err(AppError::BadRequest(format!(
                "Job is not accepting applications (status '{}')",
                job.status
            )));
        }

        let repo = ApplicationRepository::new(self.db);
        if repo.exists_for(params.job_id, params.applicant_id).await? {
            return Err(AppError::Conflict(
                "You have already applied for this job".to_string(),
            ));
        }

        let application = repo.create(params).await.map_err(|err| {
            match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::Conflict("You have already applied for this job".to_string())
                }
                _ => AppError::from(err),
            }
        })?;

        tracing::info!(
            "Application {} submitted by user {} for job {}",
            application.id,
            application.applicant_id,
            application.job_id
        );

        NotificationService::new(self.db)
            .application_submitted(&application, &job.title)
            .await?;

        Ok(application)
    }

    /// Fetches an application visible to `actor`.
    ///
    /// # Returns
    /// - `Ok(Application)` - Actor is HR staff or the applicant
    /// - `Err(AppError::NotFound)` - No application with that ID
    /// - `Err(AuthError::AccessDenied)` - Actor is neither
    pub async fn get(&self, id: i32, actor: &User) -> Result<Application, AppError> {
        let application = self.find(id).await?;

        if !actor.role.is_hr_staff() && application.applicant_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("User is not allowed to view application {}", id),
            )
            .into());
        }

        Ok(application)
    }

    pub async fn list_for_job(
        &self,
        job_id: i32,
        status: Option<ApplicationStatus>,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Result<ApplicationPage, AppError> {
        if JobRepository::new(self.db).find_by_id(job_id).await?.is_none() {
            return Err(AppError::NotFound("Job not found".to_string()));
        }

        let (applications, total) = ApplicationRepository::new(self.db)
            .list_for_job(job_id, status, limit, offset)
            .await?;

        Ok(ApplicationPage {
            applications,
            total,
        })
    }

    pub async fn list_for_applicant(&self, applicant_id: i32) -> Result<Vec<Application>, AppError> {
        Ok(ApplicationRepository::new(self.db)
            .list_for_applicant(applicant_id)
            .await?)
    }

    pub async fn search(&self, params: ApplicationSearchParams) -> Result<Vec<Application>, AppError> {
        Ok(ApplicationRepository::new(self.db).search(params).await?)
    }

    pub async fn statistics(&self, job_id: Option<i32>) -> Result<ApplicationStatistics, AppError> {
        let counts = ApplicationRepository::new(self.db)
            .count_by_status(job_id)
            .await?;

        Ok(ApplicationStatistics::from_counts(&counts))
    }

    /// Moves an application to a new status on behalf of HR staff.
    ///
    /// # Returns
    /// - `Ok(Application)` - The updated application
    /// - `Err(AppError::NotFound)` - No application with that ID
    /// - `Err(AppError::BadRequest)` - Target is `withdrawn`, which only the applicant may set
    /// - `Err(AppError::TransitionErr)` - Move not allowed from the current status
    pub async fn update_status(
        &self,
        id: i32,
        status: ApplicationStatus,
        notes: Option<String>,
        actor: &User,
    ) -> Result<Application, AppError> {
        if status == ApplicationStatus::Withdrawn {
            return Err(AppError::BadRequest(
                "Applications can only be withdrawn by the applicant".to_string(),
            ));
        }

        let application = self.find(id).await?;
        application.status.ensure_transition(status)?;

        let change = application.status_change(status, notes, actor.id, Utc::now());
        let updated = ApplicationRepository::new(self.db)
            .apply_status_change(id, change)
            .await?;

        tracing::info!(
            "Application {} moved from {} to {} by user {}",
            id,
            application.status,
            updated.status,
            actor.id
        );

        NotificationService::new(self.db)
            .application_status_changed(&updated, actor.id)
            .await?;

        Ok(updated)
    }

    /// Withdraws an application on behalf of its applicant.
    ///
    /// # Returns
    /// - `Ok(Application)` - The application in `withdrawn` status
    /// - `Err(AppError::NotFound)` - No application with that ID
    /// - `Err(AuthError::AccessDenied)` - Actor is not the applicant
    /// - `Err(AppError::TransitionErr)` - Application is already in a terminal status
    pub async fn withdraw(&self, id: i32, actor: &User) -> Result<Application, AppError> {
        let application = self.find(id).await?;

        if application.applicant_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("Only the applicant can withdraw application {}", id),
            )
            .into());
        }

        application
            .status
            .ensure_transition(ApplicationStatus::Withdrawn)?;

        let change =
            application.status_change(ApplicationStatus::Withdrawn, None, actor.id, Utc::now());
        let updated = ApplicationRepository::new(self.db)
            .apply_status_change(id, change)
            .await?;

        tracing::info!("Application {} withdrawn by user {}", id, actor.id);
        Ok(updated)
    }

    /// Applies one status change to many applications atomically.
    ///
    /// Every listed ID must exist and every move must be allowed before anything is
    /// written; the writes share one transaction. Applicants are notified after commit.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of applications updated
    /// - `Err(AppError::BadRequest)` - Empty ID list, missing status, or target `withdrawn`
    /// - `Err(AppError::NotFound)` - At least one ID doesn't exist
    /// - `Err(AppError::TransitionErr)` - At least one move is not allowed
    pub async fn bulk_update(&self, params: BulkUpdateParams) -> Result<u64, AppError> {
        if params.application_ids.is_empty() {
            return Err(AppError::BadRequest(
                "applicationIds must not be empty".to_string(),
            ));
        }
        let status = params
            .status
            .ok_or_else(|| AppError::BadRequest("status is required".to_string()))?;
        if status == ApplicationStatus::Withdrawn {
            return Err(AppError::BadRequest(
                "Applications can only be withdrawn by the applicant".to_string(),
            ));
        }

        let mut ids = params.application_ids.clone();
        ids.sort_unstable();
        ids.dedup();

        let txn = self.db.begin().await?;
        let updated = match apply_bulk(&txn, &ids, status, &params, Utc::now()).await {
            Ok(updated) => updated,
            Err(err) => {
                txn.rollback().await?;
                return Err(err);
            }
        };
        txn.commit().await?;

        tracing::info!(
            "Bulk updated {} applications to {} by user {}",
            updated.len(),
            status,
            params.actor_id
        );

        let notifications = NotificationService::new(self.db);
        for application in &updated {
            notifications
                .application_status_changed(application, params.actor_id)
                .await?;
        }

        Ok(updated.len() as u64)
    }

    async fn find(&self, id: i32) -> Result<Application, AppError> {
        ApplicationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))
    }
}

/// Validates every row of a bulk update, then writes them through `txn`.
async fn apply_bulk(
    txn: &DatabaseTransaction,
    ids: &[i32],
    status: ApplicationStatus,
    params: &BulkUpdateParams,
    now: DateTime<Utc>,
) -> Result<Vec<Application>, AppError> {
    let repo = ApplicationRepository::new(txn);

    let applications = repo.find_many(ids).await?;
    if let Some(missing) = ids
        .iter()
        .find(|id| !applications.iter().any(|a| a.id == **id))
    {
        return Err(AppError::NotFound(format!(
            "Application {} not found",
            missing
        )));
    }

    for application in &applications {
        application.status.ensure_transition(status)?;
    }

    let mut updated = Vec::with_capacity(applications.len());
    for application in &applications {
        let change = application.status_change(status, params.notes.clone(), params.actor_id, now);
        updated.push(repo.apply_status_change(application.id, change).await?);
    }

    Ok(updated)
}
