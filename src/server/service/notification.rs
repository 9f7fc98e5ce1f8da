//! Notification mailbox and the notices other services send through it.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        application::ApplicationStatus,
        document::DocumentStatus,
        notification::{NotificationPriority, NotificationType},
    },
    server::{
        data::notification::NotificationRepository,
        error::AppError,
        model::{
            application::Application,
            document::Document,
            interview::Interview,
            notification::{
                CreateNotificationParams, Notification, NotificationListParams, NotificationPage,
            },
        },
    },
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, AppError> {
        if params.title.trim().is_empty() || params.message.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Notification title and message are required".to_string(),
            ));
        }

        Ok(NotificationRepository::new(self.db).create(params).await?)
    }

    /// Lists one page of the user's mailbox, newest first.
    pub async fn list(
        &self,
        user_id: i32,
        params: NotificationListParams,
    ) -> Result<NotificationPage, AppError> {
        let (notifications, total) = NotificationRepository::new(self.db)
            .list_for_user(user_id, params)
            .await?;

        Ok(NotificationPage::new(notifications, total, params))
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .count_unread(user_id)
            .await?)
    }

    /// Marks one notification as read.
    ///
    /// # Returns
    /// - `Ok(())` - Marked
    /// - `Err(AppError::NotFound)` - Missing or owned by another user
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        if !NotificationRepository::new(self.db)
            .mark_read(id, user_id)
            .await?
        {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }
        Ok(())
    }

    /// Marks all of the user's unread notifications as read and returns how many changed.
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .mark_all_read(user_id)
            .await?)
    }

    /// # Returns
    /// - `Ok(())` - Deleted
    /// - `Err(AppError::NotFound)` - Missing or owned by another user
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        if !NotificationRepository::new(self.db)
            .delete(id, user_id)
            .await?
        {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }
        Ok(())
    }

    /// Confirms receipt of a new application to its applicant.
    pub async fn application_submitted(
        &self,
        application: &Application,
        job_title: &str,
    ) -> Result<Notification, AppError> {
        self.create(CreateNotificationParams {
            user_id: application.applicant_id,
            title: "Application submitted".to_string(),
            message: format!("Your application for {} has been received.", job_title),
            notification_type: NotificationType::ApplicationSubmitted,
            priority: NotificationPriority::Medium,
            action_url: Some(format!("/applications/{}", application.id)),
            triggered_by_id: Some(application.applicant_id),
        })
        .await
    }

    /// Tells an applicant their application moved to a new status.
    pub async fn application_status_changed(
        &self,
        application: &Application,
        actor_id: i32,
    ) -> Result<Notification, AppError> {
        let priority = match application.status {
            ApplicationStatus::Offered | ApplicationStatus::Hired => NotificationPriority::High,
            _ => NotificationPriority::Medium,
        };

        self.create(CreateNotificationParams {
            user_id: application.applicant_id,
            title: "Application status updated".to_string(),
            message: format!(
                "Your application status changed to {}.",
                application.status
            ),
            notification_type: NotificationType::ApplicationStatusChanged,
            priority,
            action_url: Some(format!("/applications/{}", application.id)),
            triggered_by_id: Some(actor_id),
        })
        .await
    }

    /// Tells an applicant an interview was scheduled for them.
    pub async fn interview_scheduled(
        &self,
        interview: &Interview,
        applicant_id: i32,
    ) -> Result<Notification, AppError> {
        self.create(CreateNotificationParams {
            user_id: applicant_id,
            title: "Interview scheduled".to_string(),
            message: format!(
                "{} is scheduled for {}.",
                interview.title,
                interview.scheduled_at.format("%Y-%m-%d %H:%M UTC")
            ),
            notification_type: NotificationType::InterviewScheduled,
            priority: NotificationPriority::High,
            action_url: Some(format!("/interviews/{}", interview.id)),
            triggered_by_id: Some(interview.scheduled_by_id),
        })
        .await
    }

    /// Tells an uploader the outcome of a document review.
    pub async fn document_reviewed(&self, document: &Document) -> Result<Notification, AppError> {
        let priority = match document.status {
            DocumentStatus::Rejected | DocumentStatus::RequiresUpdate => NotificationPriority::High,
            _ => NotificationPriority::Medium,
        };

        self.create(CreateNotificationParams {
            user_id: document.uploaded_by_id,
            title: "Document reviewed".to_string(),
            message: format!(
                "Your document {} was marked {}.",
                document.original_name, document.status
            ),
            notification_type: NotificationType::DocumentReviewed,
            priority,
            action_url: Some(format!("/documents/{}", document.id)),
            triggered_by_id: document.reviewed_by_id,
        })
        .await
    }
}
