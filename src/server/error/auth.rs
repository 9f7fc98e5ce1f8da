use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Bearer token failed signature, issuer or format validation.
    #[error("Bearer token is invalid: {0}")]
    InvalidToken(String),

    /// Bearer token signature is valid but its `exp` has passed.
    #[error("Bearer token has expired")]
    TokenExpired,

    /// Token subject refers to a user that no longer exists.
    #[error("User {0} referenced by token was not found")]
    UserNotFound(i32),

    /// Email/password pair did not match a stored account.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Refresh token is unknown or has already been rotated.
    #[error("Refresh token is invalid")]
    InvalidRefreshToken,

    /// User is authenticated but lacks the role or ownership the action requires.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Reason logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `TokenExpired` / `UserNotFound` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid credentials"
/// - `InvalidRefreshToken` → 401 Unauthorized with "Invalid refresh token"
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level while keeping client-facing messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::InvalidToken(_) | Self::TokenExpired | Self::UserNotFound(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid or expired token")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::InvalidRefreshToken => (StatusCode::UNAUTHORIZED, "Invalid refresh token"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
