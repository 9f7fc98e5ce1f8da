use crate::server::{
    data::notification::NotificationRepository, model::notification::NotificationListParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod list_for_user;
mod mark_all_read;
mod mark_read;
