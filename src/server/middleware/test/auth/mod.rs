use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::user::User,
    service::auth::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn tokens() -> TokenService {
    TokenService::new("guard-secret", chrono::Duration::minutes(15))
}

/// Builds request headers carrying a bearer token for `user`.
fn bearer_for(tokens: &TokenService, user: entity::user::Model) -> HeaderMap {
    let token = tokens.issue(&User::from_entity(user).unwrap()).unwrap();
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
