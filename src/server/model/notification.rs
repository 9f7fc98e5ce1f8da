//! Notification domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::notification::{
        CreateNotificationDto, NotificationDto, NotificationListQuery, NotificationPriority,
        NotificationType, PaginatedNotificationsDto,
    },
    server::model::parse_column,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub priority: NotificationPriority,
    pub is_read: bool,
    pub action_url: Option<String>,
    pub triggered_by_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            notification_type: parse_column(&entity.notification_type)?,
            priority: parse_column(&entity.priority)?,
            user_id: entity.user_id,
            title: entity.title,
            message: entity.message,
            is_read: entity.is_read,
            action_url: entity.action_url,
            triggered_by_id: entity.triggered_by_id,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            message: self.message,
            notification_type: self.notification_type,
            priority: self.priority,
            is_read: self.is_read,
            action_url: self.action_url,
            triggered_by_id: self.triggered_by_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for queueing a notification to a single user.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub user_id: i32,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub priority: NotificationPriority,
    pub action_url: Option<String>,
    pub triggered_by_id: Option<i32>,
}

impl CreateNotificationParams {
    pub fn from_dto(triggered_by_id: i32, dto: CreateNotificationDto) -> Self {
        Self {
            user_id: dto.user_id,
            title: dto.title,
            message: dto.message,
            notification_type: dto
                .notification_type
                .unwrap_or(NotificationType::SystemAnnouncement),
            priority: dto.priority.unwrap_or(NotificationPriority::Medium),
            action_url: dto.action_url,
            triggered_by_id: Some(triggered_by_id),
        }
    }
}

/// Largest page size served from a mailbox.
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Page selection for a user's mailbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationListParams {
    /// 1-based page number.
    pub page: u64,
    pub limit: u64,
    pub unread_only: bool,
}

impl NotificationListParams {
    /// Clamps page to at least 1 and limit to `1..=MAX_PAGE_LIMIT`.
    pub fn from_query(query: NotificationListQuery) -> Self {
        Self {
            page: query.page.max(1),
            limit: query.limit.clamp(1, MAX_PAGE_LIMIT),
            unread_only: query.unread_only,
        }
    }

    /// Rows to skip, bounded by the largest offset SQLite accepts.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPage {
    pub notifications: Vec<Notification>,
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
}

impl NotificationPage {
    pub fn new(notifications: Vec<Notification>, total: u64, params: NotificationListParams) -> Self {
        Self {
            notifications,
            total,
            page: params.page,
            total_pages: total.div_ceil(params.limit),
        }
    }

    pub fn into_dto(self) -> PaginatedNotificationsDto {
        PaginatedNotificationsDto {
            notifications: self
                .notifications
                .into_iter()
                .map(Notification::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            total_pages: self.total_pages,
        }
    }
}
