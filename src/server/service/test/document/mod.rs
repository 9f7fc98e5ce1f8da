use crate::{
    model::document::{DocumentStatus, DocumentType},
    server::{
        data::notification::NotificationRepository,
        error::{auth::AuthError, AppError},
        model::document::UploadDocumentParams,
        service::{document::DocumentService, test::as_user},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod review;
mod visibility;
