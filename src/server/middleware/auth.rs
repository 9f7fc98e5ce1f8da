use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::token::TokenService,
};

/// Role-derived capabilities a route can demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// super_admin, hr_admin, hr_manager or recruiter.
    HrStaff,
    /// super_admin, hr_admin or hr_manager.
    HrManagement,
    /// HR staff or interviewer.
    ScheduleInterviews,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the bearer token and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - Token valid, user exists and holds every permission
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken | TokenExpired | UserNotFound)` - Token unusable
    /// - `Err(AuthError::AccessDenied)` - First permission the user lacks
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = bearer_token(self.headers)?;

        let claims = self.tokens.verify(token)?;
        let user_id = claims.user_id()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotFound(user_id).into());
        };

        for permission in permissions {
            let granted = match permission {
                Permission::HrStaff => user.role.is_hr_staff(),
                Permission::HrManagement => user.role.is_hr_management(),
                Permission::ScheduleInterviews => user.role.can_schedule_interviews(),
            };
            if !granted {
                return Err(AuthError::AccessDenied(
                    user.id,
                    format!("Role {} lacks {:?} permission", user.role, permission),
                )
                .into());
            }
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Authorization header is not ASCII".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}
