//! Notification data repository for database operations.
//!
//! Every read and write except `create` is scoped to the owning user, so a notification
//! belonging to someone else behaves exactly like a missing one.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::notification::{
    CreateNotificationParams, Notification, NotificationListParams,
};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an unread notification.
    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            message: ActiveValue::Set(params.message),
            notification_type: ActiveValue::Set(params.notification_type.as_str().to_string()),
            priority: ActiveValue::Set(params.priority.as_str().to_string()),
            is_read: ActiveValue::Set(false),
            action_url: ActiveValue::Set(params.action_url),
            triggered_by_id: ActiveValue::Set(params.triggered_by_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Notification::from_entity(entity)
    }

    /// Lists one page of a user's notifications, newest first.
    ///
    /// # Returns
    /// - `Ok((notifications, total))` - Requested page and the total matching the filter
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_for_user(
        &self,
        user_id: i32,
        params: NotificationListParams,
    ) -> Result<(Vec<Notification>, u64), DbErr> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id));
        if params.unread_only {
            query = query.filter(entity::notification::Column::IsRead.eq(false));
        }

        let total = query.clone().count(self.db).await?;
        let notifications = query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .limit(params.limit)
            .offset(params.offset())
            .all(self.db)
            .await?
            .into_iter()
            .map(Notification::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((notifications, total))
    }

    pub async fn count_unread(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }

    /// Marks one of the user's notifications as read.
    ///
    /// # Returns
    /// - `Ok(true)` - Notification exists and belongs to the user
    /// - `Ok(false)` - No such notification for this user
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks every unread notification of the user as read.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of notifications flipped
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// # Returns
    /// - `Ok(true)` - Notification deleted
    /// - `Ok(false)` - No such notification for this user
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
