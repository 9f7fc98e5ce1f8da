use crate::{
    model::notification::{NotificationPriority, NotificationType},
    server::{
        error::AppError,
        model::notification::{CreateNotificationParams, NotificationListParams},
        service::notification::NotificationService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod mailbox;
