//! Notification factory for creating test mailbox entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notifications with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::notification::NotificationFactory;
///
/// let notification = NotificationFactory::new(&db, user.id)
///     .priority("urgent")
///     .read(true)
///     .build()
///     .await?;
/// ```
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    notification_type: String,
    priority: String,
    is_read: bool,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new NotificationFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Notification {id}"`
    /// - notification_type: `"system_announcement"`
    /// - priority: `"medium"`
    /// - is_read: `false`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Notification {}", id),
            notification_type: "system_announcement".to_string(),
            priority: "medium".to_string(),
            is_read: false,
        }
    }

    pub fn notification_type(mut self, notification_type: impl Into<String>) -> Self {
        self.notification_type = notification_type.into();
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    /// Builds and inserts the notification entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::notification::Model)` - Created notification entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            message: ActiveValue::Set("Test notification message".to_string()),
            notification_type: ActiveValue::Set(self.notification_type),
            priority: ActiveValue::Set(self.priority),
            is_read: ActiveValue::Set(self.is_read),
            action_url: ActiveValue::Set(None),
            triggered_by_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread notification for the given user.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, user_id).build().await
}
